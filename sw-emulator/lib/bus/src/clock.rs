/*++

Licensed under the Apache-2.0 license.

File Name:

    clock.rs

Abstract:

    File contains Clock and Timer types, used to implement timer-based
    deferred execution for peripherals.

--*/

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::Bus;

/// Peripherals that want timer-based deferred execution store a `Timer`
/// inside themselves and use it to schedule a future [`Bus::poll`]. The
/// handle returned by [`Timer::schedule_poll_in`] is later consumed with
/// [`Timer::fired`] inside `poll` to find out whether this peripheral's
/// deadline is the one that came due.
#[derive(Clone)]
pub struct Timer {
    clock: Rc<ClockImpl>,
}

impl Timer {
    /// Constructs a new timer bound to the specified clock.
    pub fn new(clock: &Clock) -> Self {
        Self {
            clock: Rc::clone(&clock.clock),
        }
    }

    /// The number of clock cycles elapsed since simulation start.
    #[inline]
    pub fn now(&self) -> u64 {
        self.clock.now.get()
    }

    /// Schedules a future call to [`Bus::poll()`] `ticks_from_now` cycles
    /// from now.
    pub fn schedule_poll_in(&self, ticks_from_now: u64) -> ActionHandle {
        let time = self.now() + ticks_from_now;
        let id = self.clock.next_id.get();
        self.clock.next_id.set(id + 1);
        self.clock.pending.borrow_mut().insert((time, id));
        ActionHandle { time, id }
    }

    /// If the scheduled time for `action` has come, `action` is cleared
    /// and the function returns true. Otherwise (or if `action` is None)
    /// it returns false.
    pub fn fired(&self, action: &mut Option<ActionHandle>) -> bool {
        let has_fired = match action {
            Some(handle) => handle.time <= self.now(),
            None => false,
        };
        if has_fired {
            *action = None;
        }
        has_fired
    }
}

/// Represents an action scheduled with a `Timer`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ActionHandle {
    time: u64,
    id: u64,
}

/// The simulation cycle counter.
#[derive(Clone)]
pub struct Clock {
    clock: Rc<ClockImpl>,
}

impl Clock {
    /// Constructs a new Clock with the cycle counter set to 0.
    pub fn new() -> Clock {
        Self {
            clock: Rc::new(ClockImpl {
                now: Cell::new(0),
                next_id: Cell::new(0),
                pending: RefCell::new(BTreeSet::new()),
            }),
        }
    }

    /// Constructs a `Timer` associated with this clock.
    pub fn timer(&self) -> Timer {
        Timer::new(self)
    }

    /// The number of simulated clock cycles elapsed since start.
    #[inline]
    pub fn now(&self) -> u64 {
        self.clock.now.get()
    }

    /// Increments the clock by `delta`; returns true if any scheduled
    /// timer action fired.
    pub fn increment(&self, delta: u64) -> bool {
        let now = self.clock.now.get() + delta;
        self.clock.now.set(now);

        let mut pending = self.clock.pending.borrow_mut();
        let mut fired = false;
        while let Some(&entry) = pending.first() {
            if entry.0 > now {
                break;
            }
            pending.remove(&entry);
            fired = true;
        }
        fired
    }

    /// Increments the clock by `delta`, and polls the bus if any
    /// scheduled timer action fired.
    pub fn increment_and_process_timer_actions(&self, delta: u64, bus: &mut impl Bus) {
        if self.increment(delta) {
            bus.poll();
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

struct ClockImpl {
    now: Cell<u64>,
    next_id: Cell<u64>,
    pending: RefCell<BTreeSet<(u64, u64)>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BusError, RvAddr, RvData, RvSize};

    #[derive(Default)]
    struct FakeBus {
        polls: u32,
    }

    impl Bus for FakeBus {
        fn read(&mut self, _size: RvSize, _addr: RvAddr) -> Result<RvData, BusError> {
            Ok(0)
        }
        fn write(&mut self, _size: RvSize, _addr: RvAddr, _val: RvData) -> Result<(), BusError> {
            Ok(())
        }
        fn poll(&mut self) {
            self.polls += 1;
        }
    }

    #[test]
    fn test_clock() {
        let clock = Clock::new();
        assert_eq!(clock.now(), 0);
        assert!(!clock.increment(25));
        assert_eq!(clock.now(), 25);
        assert!(!clock.increment(100));
        assert_eq!(clock.now(), 125);
    }

    #[test]
    fn test_timer_schedule() {
        let clock = Clock::new();
        let timer = clock.timer();

        let mut action0 = Some(timer.schedule_poll_in(25));
        let mut action1 = Some(timer.schedule_poll_in(40));

        assert!(!clock.increment(24));
        assert!(!timer.fired(&mut action0) && action0.is_some());
        assert!(!timer.fired(&mut action1) && action1.is_some());

        assert!(clock.increment(1));
        assert!(timer.fired(&mut action0) && action0.is_none());
        assert!(!timer.fired(&mut action0));
        assert!(!timer.fired(&mut action1) && action1.is_some());

        assert!(clock.increment(100));
        assert!(timer.fired(&mut action1) && action1.is_none());
    }

    #[test]
    fn test_increment_and_poll() {
        let clock = Clock::new();
        let timer = clock.timer();
        let mut bus = FakeBus::default();

        let mut action0 = Some(timer.schedule_poll_in(25));
        clock.increment_and_process_timer_actions(20, &mut bus);
        assert_eq!(bus.polls, 0);

        clock.increment_and_process_timer_actions(20, &mut bus);
        assert_eq!(bus.polls, 1);
        assert!(timer.fired(&mut action0));
    }
}
