use super::timer::Scheduler;
use std::cell::RefCell;
use std::rc::Rc;

/// Trailing-edge debouncer.
///
/// Every [`trigger`](Debouncer::trigger) replaces the pending task, so the
/// callback runs once, `delay_ms` after the last trigger, with the last value.
/// Dropping the debouncer cancels whatever is pending.
pub struct Debouncer<S: Scheduler, T> {
    scheduler: S,
    delay_ms: u32,
    callback: Rc<dyn Fn(T)>,
    pending: Rc<RefCell<Option<S::Handle>>>,
}

impl<S: Scheduler, T: 'static> Debouncer<S, T> {
    pub fn new(scheduler: S, delay_ms: u32, callback: impl Fn(T) + 'static) -> Self {
        Self {
            scheduler,
            delay_ms,
            callback: Rc::new(callback),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn trigger(&self, value: T) {
        let callback = self.callback.clone();
        let slot = Rc::downgrade(&self.pending);
        let handle = self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || {
                // A torn-down debouncer never calls back, even if the timer slipped through.
                let Some(slot) = slot.upgrade() else {
                    return;
                };
                let fired = slot.borrow_mut().take();
                drop(fired);
                callback(value);
            }),
        );
        // Replacing the handle drops, and so cancels, the superseded task.
        let superseded = self.pending.borrow_mut().replace(handle);
        drop(superseded);
    }

    pub fn cancel(&self) {
        let pending = self.pending.borrow_mut().take();
        drop(pending);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}
