//! Cancellable timers.
//!
//! Components never hold a bare timer. They hold a [`TaskHandle`], and dropping
//! the handle (or the component owning it) cancels the pending task, so nothing
//! fires into a view that is no longer mounted.

use gloo_timers::callback::{Interval, Timeout};

pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    #[cfg(test)]
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle").field("armed", &self.cancel.is_some()).finish()
    }
}

pub trait Scheduler {
    /// Runs `task` once after `delay_ms`.
    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle;

    /// Runs `task` every `period_ms` until the handle is dropped.
    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle;
}

/// Browser timers backed by `setTimeout` / `setInterval`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let timeout = Timeout::new(delay_ms, task);
        TaskHandle::new(move || drop(timeout.cancel()))
    }

    fn every(&self, period_ms: u32, mut task: Box<dyn FnMut()>) -> TaskHandle {
        let interval = Interval::new(period_ms, move || task());
        TaskHandle::new(move || drop(interval.cancel()))
    }
}

#[cfg(test)]
pub mod manual {
    //! Virtual-clock scheduler for driving timers deterministically in tests.

    use super::{Scheduler, TaskHandle};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    enum Job {
        Once(Box<dyn FnOnce()>),
        Every(Box<dyn FnMut()>, u64),
    }

    struct Entry {
        seq: u64,
        due: u64,
        job: Job,
        cancelled: Rc<Cell<bool>>,
    }

    #[derive(Default)]
    struct Inner {
        now: u64,
        next_seq: u64,
        entries: Vec<Entry>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        inner: Rc<RefCell<Inner>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of tasks that are scheduled and not cancelled.
        pub fn pending(&self) -> usize {
            self.inner.borrow().entries.iter().filter(|e| !e.cancelled.get()).count()
        }

        fn push(&self, delay: u64, job: Job) -> TaskHandle {
            let cancelled = Rc::new(Cell::new(false));
            let mut inner = self.inner.borrow_mut();
            let seq = inner.next_seq;
            inner.next_seq += 1;
            let due = inner.now + delay;
            inner.entries.push(Entry { seq, due, job, cancelled: cancelled.clone() });
            TaskHandle::new(move || cancelled.set(true))
        }

        /// Moves the clock forward, running every task that falls due in order.
        pub fn advance(&self, ms: u64) {
            let target = self.inner.borrow().now + ms;
            loop {
                let entry = {
                    let mut inner = self.inner.borrow_mut();
                    inner.entries.retain(|e| !e.cancelled.get());
                    let next = inner
                        .entries
                        .iter()
                        .enumerate()
                        .filter(|(_, e)| e.due <= target)
                        .min_by_key(|(_, e)| (e.due, e.seq))
                        .map(|(i, _)| i);
                    match next {
                        Some(i) => {
                            let entry = inner.entries.remove(i);
                            inner.now = entry.due;
                            entry
                        }
                        None => {
                            inner.now = target;
                            return;
                        }
                    }
                };

                match entry.job {
                    Job::Once(task) => task(),
                    Job::Every(mut task, period) => {
                        task();
                        if !entry.cancelled.get() {
                            let mut inner = self.inner.borrow_mut();
                            let seq = inner.next_seq;
                            inner.next_seq += 1;
                            inner.entries.push(Entry {
                                seq,
                                due: entry.due + period,
                                job: Job::Every(task, period),
                                cancelled: entry.cancelled,
                            });
                        }
                    }
                }
            }
        }
    }

    impl Scheduler for ManualScheduler {
        fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
            self.push(u64::from(delay_ms), Job::Once(task))
        }

        fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle {
            let period = u64::from(period_ms.max(1));
            self.push(period, Job::Every(task, period))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn once_fires_after_delay() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let _handle = scheduler.once(3000, Box::new(move || counter.set(counter.get() + 1)));

        scheduler.advance(2999);
        assert_eq!(fired.get(), 0);
        scheduler.advance(1);
        assert_eq!(fired.get(), 1);
        scheduler.advance(10_000);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn dropping_handle_cancels() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let handle = scheduler.once(100, Box::new(move || flag.set(true)));
        drop(handle);

        scheduler.advance(1000);
        assert!(!fired.get());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn every_repeats_until_cancelled() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let handle = scheduler.every(250, Box::new(move || counter.set(counter.get() + 1)));

        scheduler.advance(1000);
        assert_eq!(ticks.get(), 4);
        handle.cancel();
        scheduler.advance(1000);
        assert_eq!(ticks.get(), 4);
    }
}
