use super::*;

fn hit() -> IntersectionReport {
    IntersectionReport { intersecting: true, ratio: 0.5 }
}

fn miss() -> IntersectionReport {
    IntersectionReport { intersecting: false, ratio: 0.0 }
}

fn tracker(count: usize) -> RevealTracker<&'static str> {
    RevealTracker::new(count, REVEAL_THRESHOLD)
}

// =============================================================
// RevealState
// =============================================================

#[test]
fn reveal_state_starts_all_hidden() {
    let state = RevealState::new(4);
    assert_eq!(state.len(), 4);
    assert_eq!(state.visible_count(), 0);
    assert!((0..4).all(|i| !state.is_visible(i)));
}

#[test]
fn reveal_state_reports_change_once() {
    let mut state = RevealState::new(2);
    assert!(state.reveal(1));
    assert!(!state.reveal(1));
    assert!(state.is_visible(1));
    assert!(!state.is_visible(0));
}

#[test]
fn reveal_state_ignores_out_of_range() {
    let mut state = RevealState::new(2);
    assert!(!state.reveal(7));
    assert!(!state.is_visible(7));
    assert_eq!(state.visible_count(), 0);
}

#[test]
fn reveal_state_empty_is_all_visible() {
    let state = RevealState::default();
    assert!(state.is_empty());
    assert!(state.all_visible());
}

// =============================================================
// IntersectionReport
// =============================================================

#[test]
fn report_requires_intersection_and_threshold() {
    assert!(hit().crosses(REVEAL_THRESHOLD));
    assert!(!miss().crosses(REVEAL_THRESHOLD));
    assert!(!IntersectionReport { intersecting: true, ratio: 0.05 }.crosses(REVEAL_THRESHOLD));
    assert!(!IntersectionReport { intersecting: false, ratio: 0.9 }.crosses(REVEAL_THRESHOLD));
}

#[test]
fn report_tolerates_rounding_at_threshold() {
    assert!(IntersectionReport { intersecting: true, ratio: 0.0999 }.crosses(0.1));
    assert!(IntersectionReport { intersecting: true, ratio: 0.1 }.crosses(0.1));
}

// =============================================================
// attach
// =============================================================

#[test]
fn attach_returns_only_new_targets() {
    let mut t = tracker(3);
    let first = t.attach([("a", 0), ("b", 1)]);
    assert_eq!(first.fresh, vec!["a", "b"]);

    // Same targets again plus one that mounted later.
    let second = t.attach([("a", 0), ("b", 1), ("c", 2)]);
    assert_eq!(second.fresh, vec!["c"]);
    assert!(second.released.is_empty());
    assert_eq!(t.observed_len(), 3);
}

#[test]
fn attach_is_idempotent() {
    let mut t = tracker(2);
    t.attach([("a", 0), ("b", 1)]);
    assert_eq!(t.attach([("a", 0), ("b", 1)]), Attached::default());
    assert_eq!(t.observed_len(), 2);
}

#[test]
fn attach_skips_out_of_range_indices() {
    let mut t = tracker(1);
    assert_eq!(t.attach([("a", 0), ("z", 5)]).fresh, vec!["a"]);
}

#[test]
fn attach_skips_already_visible_indices() {
    let mut t = tracker(2);
    t.attach([("a", 0)]);
    assert_eq!(t.detect(&"a", hit()), Some(0));

    // Element for index 0 remounted as a new node: nothing to observe.
    assert!(t.attach([("a2", 0)]).fresh.is_empty());
}

#[test]
fn remounted_targets_replace_stale_ones() {
    let mut t: RevealTracker<String> = RevealTracker::new(2, REVEAL_THRESHOLD);
    for pass in 0..50 {
        let targets = [(format!("a{pass}"), 0), (format!("b{pass}"), 1)];
        let attached = t.attach(targets);
        assert_eq!(attached.fresh.len(), 2);
        if pass > 0 {
            assert_eq!(attached.released, vec![format!("a{}", pass - 1), format!("b{}", pass - 1)]);
        }
    }
    assert_eq!(t.observed_len(), 2);
}

#[test]
fn filtered_out_targets_are_released() {
    let mut t = tracker(3);
    t.attach([("a", 0), ("b", 1), ("c", 2)]);

    // Filter narrowed the list: only one card remains, now at index 0.
    let attached = t.attach([("c2", 0)]);
    assert_eq!(attached.fresh, vec!["c2"]);
    assert_eq!(attached.released, vec!["a", "b", "c"]);
    assert_eq!(t.observed_len(), 1);

    // Stale nodes no longer reveal anything.
    assert_eq!(t.detect(&"b", hit()), None);
    assert_eq!(t.detect(&"c2", hit()), Some(0));
}

// =============================================================
// detect
// =============================================================

#[test]
fn detect_reveals_index_of_target() {
    let mut t = tracker(3);
    t.attach([("a", 0), ("b", 1), ("c", 2)]);
    assert_eq!(t.detect(&"b", hit()), Some(1));
    assert_eq!(t.state().as_slice(), &[false, true, false]);
    assert_eq!(t.observed_len(), 2);
}

#[test]
fn detect_ignores_misses_and_unknown_targets() {
    let mut t = tracker(2);
    t.attach([("a", 0)]);
    assert_eq!(t.detect(&"a", miss()), None);
    assert_eq!(t.detect(&"nobody", hit()), None);
    assert_eq!(t.state().visible_count(), 0);
    assert_eq!(t.observed_len(), 1);
}

#[test]
fn detect_twice_is_noop() {
    let mut t = tracker(1);
    t.attach([("a", 0)]);
    assert_eq!(t.detect(&"a", hit()), Some(0));
    assert_eq!(t.detect(&"a", hit()), None);
    assert!(t.state().is_visible(0));
}

#[test]
fn flags_never_return_to_false() {
    let mut t = tracker(4);
    let targets = [("a", 0), ("b", 1), ("c", 2), ("d", 3)];
    let mut previous = t.state().clone();
    for round in 0..12 {
        t.attach(targets);
        let (target, _) = targets[round % targets.len()];
        let report = if round % 3 == 0 { miss() } else { hit() };
        t.detect(&target, report);
        for index in 0..4 {
            if previous.is_visible(index) {
                assert!(t.state().is_visible(index), "index {index} went back to hidden");
            }
        }
        previous = t.state().clone();
    }
    assert!(t.state().all_visible());
}

// =============================================================
// teardown / fail open
// =============================================================

#[test]
fn teardown_returns_observed_and_is_repeatable() {
    let mut t = tracker(2);
    t.attach([("a", 0), ("b", 1)]);
    let released = t.teardown();
    assert_eq!(released.len(), 2);
    assert!(t.is_torn_down());
    assert!(t.teardown().is_empty());
}

#[test]
fn nothing_happens_after_teardown() {
    let mut t = tracker(2);
    t.attach([("a", 0)]);
    t.teardown();
    assert_eq!(t.detect(&"a", hit()), None);
    assert_eq!(t.attach([("b", 1)]), Attached::default());
    assert_eq!(t.state().visible_count(), 0);
}

#[test]
fn fail_open_reveals_everything() {
    let mut t = tracker(3);
    t.attach([("a", 0)]);
    t.fail_open();
    assert!(t.state().all_visible());
    assert_eq!(t.observed_len(), 0);
}

// =============================================================
// Presentation helpers
// =============================================================

#[test]
fn stagger_delay_scales_with_index() {
    assert_eq!(stagger_delay_ms(0, DEFAULT_STAGGER_MS), 0);
    assert_eq!(stagger_delay_ms(3, DEFAULT_STAGGER_MS), 300);
    assert_eq!(stagger_delay_ms(usize::MAX, 10), u32::MAX);
    assert_eq!(transition_delay_style(2, 150), "transition-delay: 300ms");
}

#[test]
fn reveal_class_toggles_opacity() {
    assert!(reveal_class(false).contains("opacity-0"));
    assert!(reveal_class(true).contains("opacity-100"));
    assert!(reveal_class(true).contains("transition-all"));
}
