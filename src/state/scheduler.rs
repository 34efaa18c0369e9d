//! Deferred task queue and redraw requests.
//!
//! Nodes never own timers. A node that wants something to happen later
//! (an animation advancing its frame) hands a one-shot task to the
//! [`Scheduler`]; the run loop executes due tasks on its own thread between
//! input events and render ticks, so tasks never race with key handling or
//! rendering.
//!
//! Tasks report "something changed" through [`Scheduler::request_redraw`]
//! instead of touching the navigator; the loop turns pending requests into a
//! dirty frame.
//!
//! # Example
//!
//! ```ignore
//! let scheduler = Scheduler::new();
//! scheduler.after(Duration::from_millis(200), |s| s.request_redraw());
//!
//! scheduler.run_due(Instant::now() + Duration::from_millis(200));
//! assert!(scheduler.take_redraw());
//! ```

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

/// A one-shot deferred task.
pub type Task = Box<dyn FnOnce(&Scheduler)>;

struct Pending {
    due: Instant,
    seq: u64,
    task: Task,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    // Reversed so the max-heap pops the earliest deadline first; ties run in
    // scheduling order.
    fn cmp(&self, other: &Self) -> Ordering {
        other.due.cmp(&self.due).then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Single-threaded queue of one-shot tasks plus a redraw flag.
#[derive(Default)]
pub struct Scheduler {
    queue: RefCell<BinaryHeap<Pending>>,
    next_seq: Cell<u64>,
    redraw: Cell<bool>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` once, no earlier than `delay` from now.
    pub fn after(&self, delay: Duration, task: impl FnOnce(&Scheduler) + 'static) {
        self.at(Instant::now() + delay, task);
    }

    /// Run `task` once, no earlier than `due`.
    pub fn at(&self, due: Instant, task: impl FnOnce(&Scheduler) + 'static) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.queue.borrow_mut().push(Pending {
            due,
            seq,
            task: Box::new(task),
        });
    }

    /// Deadline of the earliest pending task.
    pub fn next_due(&self) -> Option<Instant> {
        self.queue.borrow().peek().map(|p| p.due)
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run every task due at or before `now`. Returns how many ran.
    ///
    /// Tasks scheduled by a running task are not run in the same call unless
    /// they are already due.
    pub fn run_due(&self, now: Instant) -> usize {
        let mut ran = 0;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                match queue.peek() {
                    Some(p) if p.due <= now => queue.pop(),
                    _ => None,
                }
            };
            let Some(pending) = next else { break };
            (pending.task)(self);
            ran += 1;
        }
        ran
    }

    /// Ask for the next frame to be recomputed.
    pub fn request_redraw(&self) {
        self.redraw.set(true);
    }

    /// Consume a pending redraw request.
    pub fn take_redraw(&self) -> bool {
        self.redraw.replace(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn runs_only_due_tasks_in_deadline_order() {
        let scheduler = Scheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let base = Instant::now();

        for (name, ms) in [("late", 30u64), ("early", 10), ("mid", 20)] {
            let log = log.clone();
            scheduler.at(base + Duration::from_millis(ms), move |_| log.borrow_mut().push(name));
        }

        assert_eq!(scheduler.next_due(), Some(base + Duration::from_millis(10)));
        assert_eq!(scheduler.run_due(base + Duration::from_millis(20)), 2);
        assert_eq!(*log.borrow(), vec!["early", "mid"]);
        assert_eq!(scheduler.pending(), 1);

        assert_eq!(scheduler.run_due(base + Duration::from_millis(30)), 1);
        assert_eq!(*log.borrow(), vec!["early", "mid", "late"]);
        assert_eq!(scheduler.next_due(), None);
    }

    #[test]
    fn ties_keep_scheduling_order() {
        let scheduler = Scheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let due = Instant::now();
        for n in 0..4 {
            let log = log.clone();
            scheduler.at(due, move |_| log.borrow_mut().push(n));
        }
        scheduler.run_due(due);
        assert_eq!(*log.borrow(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn task_can_reschedule_itself() {
        let scheduler = Scheduler::new();
        let now = Instant::now();
        scheduler.at(now, move |s| s.at(now + Duration::from_secs(1), |_| {}));

        assert_eq!(scheduler.run_due(now), 1);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn redraw_request_is_consumed_once() {
        let scheduler = Scheduler::new();
        assert!(!scheduler.take_redraw());

        scheduler.at(Instant::now(), |s| s.request_redraw());
        scheduler.run_due(Instant::now());

        assert!(scheduler.take_redraw());
        assert!(!scheduler.take_redraw());
    }
}
