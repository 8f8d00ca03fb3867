//! Scroll-triggered reveal bookkeeping.
//!
//! DESIGN
//! ======
//! The browser side (`util::reveal_observer`) owns the intersection observer
//! and DOM queries; this module owns the decisions. A `RevealTracker` keeps
//! one monotonic visibility flag per element index plus the set of targets
//! already handed to the observer, so repeated attach passes never register
//! the same element twice.
//!
//! Targets are generic so the logic runs against DOM elements in the browser
//! and plain values in tests. Identity is `PartialEq`; for `web_sys::Element`
//! that is JS object identity.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Fraction of an element's area that must be inside the viewport.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Delay between consecutive items of a staggered reveal.
pub const DEFAULT_STAGGER_MS: u32 = 100;

/// Browsers report ratios like 0.0999 for a crossing at 0.1.
const RATIO_TOLERANCE: f64 = 1e-3;

const REVEAL_HIDDEN: &str = "transition-all duration-700 ease-out opacity-0 translate-y-8";
const REVEAL_SHOWN: &str = "transition-all duration-700 ease-out opacity-100 translate-y-0";

/// Per-index "has become visible" flags. Flags only ever go false -> true.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    visible: Vec<bool>,
}

impl RevealState {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { visible: vec![false; count] }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Out-of-range indices read as not visible.
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Mark `index` visible. Returns `true` only when the flag changed.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.visible.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn reveal_all(&mut self) {
        self.visible.iter_mut().for_each(|flag| *flag = true);
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|flag| **flag).count()
    }

    #[must_use]
    pub fn all_visible(&self) -> bool {
        self.visible.iter().all(|flag| *flag)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.visible
    }
}

/// One intersection observation for a single target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionReport {
    pub intersecting: bool,
    pub ratio: f64,
}

impl IntersectionReport {
    #[must_use]
    pub fn crosses(&self, threshold: f64) -> bool {
        self.intersecting && self.ratio + RATIO_TOLERANCE >= threshold
    }
}

/// Result of one `RevealTracker::attach` pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attached<T> {
    /// Start observing these.
    pub fresh: Vec<T>,
    /// Stop observing these.
    pub released: Vec<T>,
}

impl<T> Default for Attached<T> {
    fn default() -> Self {
        Self { fresh: Vec::new(), released: Vec::new() }
    }
}

/// Reveal coordinator for one section instance.
#[derive(Clone, Debug)]
pub struct RevealTracker<T> {
    state: RevealState,
    observed: Vec<(T, usize)>,
    threshold: f64,
    torn_down: bool,
}

impl<T: PartialEq + Clone> RevealTracker<T> {
    #[must_use]
    pub fn new(count: usize, threshold: f64) -> Self {
        Self {
            state: RevealState::new(count),
            observed: Vec::new(),
            threshold,
            torn_down: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> &RevealState {
        &self.state
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn observed_len(&self) -> usize {
        self.observed.len()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Sync the observed set with the targets currently in the document.
    ///
    /// `targets` is the full result of one query pass. Unseen targets come
    /// back in `fresh`; observed targets missing from the pass (remounted or
    /// filtered out) come back in `released` and are forgotten. Targets
    /// already visible or tagged outside the tracked range are skipped.
    pub fn attach<I>(&mut self, targets: I) -> Attached<T>
    where
        I: IntoIterator<Item = (T, usize)>,
    {
        if self.torn_down {
            return Attached::default();
        }
        let current: Vec<(T, usize)> = targets
            .into_iter()
            .filter(|(_, index)| *index < self.state.len() && !self.state.is_visible(*index))
            .collect();

        let mut released = Vec::new();
        self.observed.retain(|(seen, _)| {
            let live = current.iter().any(|(target, _)| target == seen);
            if !live {
                released.push(seen.clone());
            }
            live
        });

        let mut fresh = Vec::new();
        for (target, index) in current {
            if self.observed.iter().any(|(seen, _)| *seen == target) {
                continue;
            }
            self.observed.push((target.clone(), index));
            fresh.push(target);
        }
        Attached { fresh, released }
    }

    /// Apply an intersection report for `target`.
    ///
    /// Returns the index that just became visible; the caller should stop
    /// observing that target. Unknown targets and sub-threshold reports are
    /// ignored.
    pub fn detect(&mut self, target: &T, report: IntersectionReport) -> Option<usize> {
        if self.torn_down || !report.crosses(self.threshold) {
            return None;
        }
        let position = self.observed.iter().position(|(seen, _)| seen == target)?;
        let (_, index) = self.observed.swap_remove(position);
        self.state.reveal(index).then_some(index)
    }

    /// No intersection primitive available: show everything.
    pub fn fail_open(&mut self) {
        self.state.reveal_all();
        self.observed.clear();
    }

    /// Stop tracking and hand back whatever was still being observed.
    /// Calling it again returns nothing.
    pub fn teardown(&mut self) -> Vec<T> {
        self.torn_down = true;
        self.observed.drain(..).map(|(target, _)| target).collect()
    }
}

/// Transition delay for item `index` of a staggered reveal.
#[must_use]
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// Inline style carrying the stagger delay.
#[must_use]
pub fn transition_delay_style(index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms", stagger_delay_ms(index, step_ms))
}

/// Utility classes for a revealable element.
#[must_use]
pub fn reveal_class(visible: bool) -> &'static str {
    if visible { REVEAL_SHOWN } else { REVEAL_HIDDEN }
}
