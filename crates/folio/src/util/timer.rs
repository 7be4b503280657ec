//! One-shot timers behind a small seam, so that timing logic can run
//! against a virtual clock in tests.

use gloo::timers::callback::Timeout;

/// Schedules one-shot tasks on the event loop.
///
/// Dropping the returned handle cancels the task if it has not fired yet.
pub trait Scheduler {
    /// Outlives the scheduling call; pending tasks may hold on to it.
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout`-backed scheduler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use super::Scheduler;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::{Rc, Weak};

    type Task = Box<dyn FnOnce()>;

    #[derive(Default)]
    struct Queue {
        now: u64,
        next_seq: u64,
        // Keyed by (due time, sequence) so equal deadlines fire in scheduling order.
        pending: BTreeMap<(u64, u64), Task>,
    }

    /// Virtual clock. Time moves only through [`ManualScheduler::advance`].
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    pub(crate) struct ManualHandle {
        key: (u64, u64),
        queue: Weak<RefCell<Queue>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(queue) = self.queue.upgrade() {
                queue.borrow_mut().pending.remove(&self.key);
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Task) -> ManualHandle {
            let mut queue = self.queue.borrow_mut();
            let key = (queue.now + u64::from(delay_ms), queue.next_seq);
            queue.next_seq += 1;
            queue.pending.insert(key, task);
            ManualHandle {
                key,
                queue: Rc::downgrade(&self.queue),
            }
        }
    }

    impl ManualScheduler {
        pub(crate) fn now(&self) -> u64 {
            self.queue.borrow().now
        }

        pub(crate) fn pending(&self) -> usize {
            self.queue.borrow().pending.len()
        }

        /// Moves the clock forward, firing due tasks in deadline order.
        pub(crate) fn advance(&self, ms: u64) {
            let target = self.now() + ms;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    let due = queue
                        .pending
                        .first_key_value()
                        .map(|(&key, _)| key)
                        .filter(|&(at, _)| at <= target);
                    due.and_then(|key| {
                        queue.now = key.0;
                        queue.pending.remove(&key)
                    })
                };
                // Tasks run without the queue borrowed; they may schedule or cancel.
                match next {
                    Some(task) => task(),
                    None => break,
                }
            }
            self.queue.borrow_mut().now = target;
        }
    }

    mod tests {
        use super::*;
        use std::cell::Cell;

        #[test]
        fn fires_in_deadline_order_and_honours_cancellation() {
            let scheduler = ManualScheduler::default();
            let log = Rc::new(RefCell::new(Vec::new()));
            let push = |tag: &'static str| {
                let log = log.clone();
                Box::new(move || log.borrow_mut().push(tag)) as Task
            };
            let _late = scheduler.schedule(30, push("late"));
            let _early = scheduler.schedule(10, push("early"));
            let cancelled = scheduler.schedule(20, push("cancelled"));
            drop(cancelled);

            scheduler.advance(15);
            assert_eq!(vec!["early"], *log.borrow());
            scheduler.advance(15);
            assert_eq!(vec!["early", "late"], *log.borrow());
            assert_eq!(30, scheduler.now());
            assert_eq!(0, scheduler.pending());
        }

        #[test]
        fn tasks_may_schedule_follow_ups() {
            let scheduler = ManualScheduler::default();
            let fired = Rc::new(Cell::new(0));
            let slot = Rc::new(RefCell::new(None));
            {
                let inner = scheduler.clone();
                let fired = fired.clone();
                let slot_for_task = slot.clone();
                *slot.borrow_mut() = Some(scheduler.schedule(
                    5,
                    Box::new(move || {
                        fired.set(fired.get() + 1);
                        let fired = fired.clone();
                        *slot_for_task.borrow_mut() = Some(
                            inner.schedule(5, Box::new(move || fired.set(fired.get() + 1))),
                        );
                    }),
                ));
            }
            scheduler.advance(10);
            assert_eq!(2, fired.get());
        }
    }
}
