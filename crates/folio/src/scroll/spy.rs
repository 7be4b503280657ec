use super::tracker::{RegionSource, ScrollState, SectionTracker, Transition, Viewport};
use crate::util::debounce::Debouncer;
use crate::util::timer::Scheduler;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Quiet period after the last scroll or resize event before sections are re-measured.
pub const SCROLL_DEBOUNCE_MS: u32 = 50;

/// Emitted after every recomputation and every explicit selection.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollUpdate {
    pub state: ScrollState,
    pub transition: Option<Transition>,
}

/// Feeds debounced viewport snapshots into a [`SectionTracker`].
///
/// Owns the pending recomputation: dropping the spy, or calling
/// [`ScrollSpy::cancel`], guarantees no further updates are emitted.
pub struct ScrollSpy<S: Scheduler> {
    tracker: Rc<RefCell<SectionTracker>>,
    on_update: Rc<dyn Fn(&ScrollUpdate)>,
    debouncer: Debouncer<S, Viewport>,
}

impl<S: Scheduler> ScrollSpy<S> {
    pub fn new<R>(
        tracker: SectionTracker,
        source: R,
        scheduler: S,
        debounce_ms: u32,
        on_update: impl Fn(&ScrollUpdate) + 'static,
    ) -> Self
    where
        R: RegionSource + 'static,
    {
        let tracker = Rc::new(RefCell::new(tracker));
        let on_update: Rc<dyn Fn(&ScrollUpdate)> = Rc::new(on_update);
        let debouncer = {
            let tracker = tracker.clone();
            let on_update = on_update.clone();
            Debouncer::new(scheduler, debounce_ms, move |viewport: Viewport| {
                let update = {
                    let mut tracker = tracker.borrow_mut();
                    let transition = tracker.recompute(&viewport, &source);
                    ScrollUpdate {
                        state: tracker.state().clone(),
                        transition,
                    }
                };
                if let Some(transition) = &update.transition {
                    debug!("Active section changed: {transition}");
                }
                on_update(&update);
            })
        };
        Self {
            tracker,
            on_update,
            debouncer,
        }
    }

    /// Call on every scroll and resize event.
    pub fn notify(&self, viewport: Viewport) {
        self.debouncer.trigger(viewport);
    }

    /// Activates a section immediately, bypassing measurement.
    pub fn select(&self, id: &str) {
        let update = {
            let mut tracker = self.tracker.borrow_mut();
            let Some(transition) = tracker.select(id) else {
                return;
            };
            debug!("Section {} selected", transition.to);
            ScrollUpdate {
                state: tracker.state().clone(),
                transition: Some(transition),
            }
        };
        (self.on_update)(&update);
    }

    pub fn state(&self) -> ScrollState {
        self.tracker.borrow().state().clone()
    }

    pub fn recomputations(&self) -> u64 {
        self.tracker.borrow().recomputations()
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn cancel(&self) {
        self.debouncer.cancel();
    }
}
