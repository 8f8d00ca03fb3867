//! `use_reveal` hook: intersection-observer wiring for staggered fade-ins.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections call `use_reveal(scope, count)` and tag each animated element with
//! `data-reveal-scope` / `data-reveal-index`. In the browser one observer per
//! section watches those elements and feeds `state::reveal::RevealTracker`;
//! the resulting flags live in a signal the view reads for its classes.
//!
//! Scopes are fixed strings so server and client render identical markup.

use leptos::prelude::*;

use crate::state::reveal::{DEFAULT_STAGGER_MS, RevealState, reveal_class, transition_delay_style};

/// Per-section reveal handle.
#[derive(Clone, Copy, Debug)]
pub struct Reveal {
    scope: &'static str,
    state: RwSignal<RevealState>,
    generation: RwSignal<u64>,
    step_ms: u32,
}

impl Reveal {
    #[must_use]
    pub fn scope(&self) -> &'static str {
        self.scope
    }

    /// Tracked visibility flag for `index`.
    #[must_use]
    pub fn visible(&self, index: usize) -> bool {
        self.state.with(|state| state.is_visible(index))
    }

    /// Tracked class list for `index`.
    #[must_use]
    pub fn class(&self, index: usize) -> &'static str {
        reveal_class(self.visible(index))
    }

    /// Inline stagger delay for `index`.
    #[must_use]
    pub fn style(&self, index: usize) -> String {
        transition_delay_style(index, self.step_ms)
    }

    /// Ask the observer to pick up elements mounted since the last pass,
    /// e.g. after a list filter changed.
    pub fn refresh(&self) {
        self.generation.update(|g| *g = g.wrapping_add(1));
    }
}

/// Create a reveal coordinator for `count` elements in `scope`.
pub fn use_reveal(scope: &'static str, count: usize) -> Reveal {
    use_reveal_with_step(scope, count, DEFAULT_STAGGER_MS)
}

/// Like `use_reveal` with a custom stagger step.
pub fn use_reveal_with_step(scope: &'static str, count: usize, step_ms: u32) -> Reveal {
    let reveal = Reveal {
        scope,
        state: RwSignal::new(RevealState::new(count)),
        generation: RwSignal::new(0),
        step_ms,
    };

    #[cfg(feature = "hydrate")]
    browser::bind(reveal, count);

    reveal
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use leptos::prelude::*;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::Reveal;
    use crate::state::reveal::{IntersectionReport, REVEAL_THRESHOLD, RevealTracker};

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    struct Binding {
        tracker: RevealTracker<Element>,
        observer: Option<IntersectionObserver>,
        callback: Option<ObserverCallback>,
    }

    impl Binding {
        fn teardown(&mut self) {
            let released = self.tracker.teardown();
            if let Some(observer) = self.observer.take() {
                observer.disconnect();
            }
            self.callback.take();
            log::debug!("reveal binding released {} pending targets", released.len());
        }
    }

    pub(super) fn bind(reveal: Reveal, count: usize) {
        let binding = Rc::new(RefCell::new(Binding {
            tracker: RevealTracker::new(count, REVEAL_THRESHOLD),
            observer: None,
            callback: None,
        }));

        match create_observer(reveal, Rc::downgrade(&binding)) {
            Some((observer, callback)) => {
                let mut b = binding.borrow_mut();
                b.observer = Some(observer);
                b.callback = Some(callback);
            }
            None => {
                log::info!("IntersectionObserver unavailable; revealing {} immediately", reveal.scope);
                let state = {
                    let mut b = binding.borrow_mut();
                    b.tracker.fail_open();
                    b.tracker.state().clone()
                };
                reveal.state.set(state);
                return;
            }
        }

        let stored = StoredValue::new_local(Some(binding));

        Effect::new(move || {
            let _ = reveal.generation.get();
            let targets = query_targets(reveal.scope);
            stored.with_value(|binding| {
                let Some(binding) = binding else {
                    return;
                };
                let mut b = binding.borrow_mut();
                let attached = b.tracker.attach(targets);
                if let Some(observer) = &b.observer {
                    for stale in &attached.released {
                        observer.unobserve(stale);
                    }
                    for target in &attached.fresh {
                        observer.observe(target);
                    }
                }
                if !attached.released.is_empty() {
                    log::trace!("{} released {} detached targets", reveal.scope, attached.released.len());
                }
            });
        });

        on_cleanup(move || {
            stored.try_update_value(|binding| {
                if let Some(binding) = binding.take() {
                    binding.borrow_mut().teardown();
                }
            });
        });
    }

    fn create_observer(reveal: Reveal, binding: Weak<RefCell<Binding>>) -> Option<(IntersectionObserver, ObserverCallback)> {
        let window = web_sys::window()?;
        let supported = js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        if !supported {
            return None;
        }

        let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            let Some(binding) = binding.upgrade() else {
                return;
            };
            let snapshot = {
                let mut b = binding.borrow_mut();
                let mut changed = false;
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let report = IntersectionReport {
                        intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    if let Some(index) = b.tracker.detect(&target, report) {
                        observer.unobserve(&target);
                        log::trace!("{} item {index} revealed", reveal.scope);
                        changed = true;
                    }
                }
                changed.then(|| b.tracker.state().clone())
            };
            if let Some(state) = snapshot {
                reveal.state.set(state);
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        Some((observer, callback))
    }

    fn query_targets(scope: &str) -> Vec<(Element, usize)> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let selector = format!("[data-reveal-scope=\"{scope}\"]");
        let Ok(nodes) = document.query_selector_all(&selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|el| {
                let index = el.get_attribute("data-reveal-index")?.parse::<usize>().ok()?;
                Some((el, index))
            })
            .collect()
    }
}
