//! Virtual time scheduler for deterministic testing.
//!
//! ManualClock implements [`Scheduler`] without real waiting: callbacks
//! fire only when time is advanced explicitly with `advance_by()`.

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::submission::Scheduler;

struct TimerEntry {
    fire_at_ms: u64,
    /// Registration order; breaks ties so equal deadlines fire FIFO.
    seq: u64,
    task: Box<dyn FnOnce()>,
}

impl PartialEq for TimerEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at_ms == other.fire_at_ms && self.seq == other.seq
    }
}

impl Eq for TimerEntry {}

impl PartialOrd for TimerEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap: earliest deadline, then earliest registration
        other
            .fire_at_ms
            .cmp(&self.fire_at_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Default)]
pub struct ManualClock {
    current_time_ms: Cell<u64>,
    next_seq: Cell<u64>,
    pending: RefCell<BinaryHeap<TimerEntry>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.current_time_ms.get()
    }

    pub fn has_pending_timers(&self) -> bool {
        !self.pending.borrow().is_empty()
    }

    pub fn time_to_next_timer(&self) -> Option<u64> {
        self.pending
            .borrow()
            .peek()
            .map(|entry| entry.fire_at_ms.saturating_sub(self.now_ms()))
    }

    /// Advance virtual time and run every callback that became due.
    ///
    /// Returns how many callbacks ran. Callbacks may schedule new ones;
    /// those also run if they fall inside the advanced window.
    pub fn advance_by(&self, ms: u64) -> usize {
        let target_time = self.now_ms() + ms;
        let mut fired = 0;
        loop {
            let due = {
                let mut pending = self.pending.borrow_mut();
                match pending.peek() {
                    Some(entry) if entry.fire_at_ms <= target_time => pending.pop(),
                    _ => None,
                }
            };
            let Some(entry) = due else { break };
            self.current_time_ms.set(entry.fire_at_ms);
            (entry.task)();
            fired += 1;
        }
        self.current_time_ms.set(target_time);
        fired
    }
}

impl Scheduler for ManualClock {
    fn schedule_once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.pending.borrow_mut().push(TimerEntry {
            fire_at_ms: self.now_ms() + u64::from(delay_ms),
            seq,
            task,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let make = {
            let log = log.clone();
            move |name: &'static str| {
                let log = log.clone();
                Box::new(move || log.borrow_mut().push(name)) as Box<dyn FnOnce()>
            }
        };
        (log, make)
    }

    #[test]
    fn clock_starts_at_zero() {
        let clock = ManualClock::new();
        assert_eq!(clock.now_ms(), 0);
        assert!(clock.time_to_next_timer().is_none());
    }

    #[test]
    fn timer_fires_at_deadline_once() {
        let clock = ManualClock::new();
        let (log, task) = recorder();
        clock.schedule_once(1000, task("reload"));

        assert_eq!(clock.advance_by(999), 0);
        assert_eq!(clock.time_to_next_timer(), Some(1));
        assert_eq!(clock.advance_by(1), 1);
        assert_eq!(*log.borrow(), ["reload"]);

        assert_eq!(clock.advance_by(5000), 0);
        assert!(!clock.has_pending_timers());
    }

    #[test]
    fn equal_deadlines_fire_in_registration_order() {
        let clock = ManualClock::new();
        let (log, task) = recorder();
        clock.schedule_once(300, task("c"));
        clock.schedule_once(100, task("a"));
        clock.schedule_once(300, task("d"));
        clock.schedule_once(200, task("b"));

        assert_eq!(clock.advance_by(300), 4);
        assert_eq!(*log.borrow(), ["a", "b", "c", "d"]);
        assert_eq!(clock.now_ms(), 300);
    }
}
