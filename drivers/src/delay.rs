//! Blocking Wait
//!
//! Busy-waits on the tick counter of a [`TickTimer`]. There is no
//! suspension, no yielding and no cancellation: once entered, a wait runs
//! until the requested number of ticks has elapsed. Only interrupt handlers
//! make progress in the meantime.
//!
//! A wait returns after at least `ticks` periods and at most one period
//! later, the slack coming from poll granularity and interrupt latency.

use crate::hal::timer::{BlockingWait, RateUnit, TickTimer, Ticks};

/// Blocking delay provider owning the tick timer.
///
/// Every wait borrows the delay mutably, so two waits can never be in flight
/// on the same timer.
#[derive(Debug)]
pub struct Delay<T: TickTimer> {
    timer: T,
}

impl<T: TickTimer> Delay<T> {
    pub fn new(timer: T) -> Self {
        Self { timer }
    }

    /// Block for `ticks` slow-unit (millisecond) ticks.
    pub fn wait(&mut self, ticks: Ticks) {
        self.wait_in(RateUnit::Slow, ticks);
    }

    /// Block for `ticks` periods of the given rate unit.
    ///
    /// A zero duration returns immediately without touching the timer.
    pub fn wait_in(&mut self, unit: RateUnit, ticks: Ticks) {
        if ticks == 0 {
            return;
        }

        self.timer.start(unit);
        while self.timer.ticks() < ticks {
            core::hint::spin_loop();
        }
        self.timer.stop();
    }

    /// Block for `ms` milliseconds, in spans of at most `Ticks::MAX`.
    pub fn wait_ms(&mut self, mut ms: u32) {
        while ms > 0 {
            let span = ms.min(Ticks::MAX as u32) as Ticks;
            self.wait(span);
            ms -= span as u32;
        }
    }

    /// Release the timer.
    pub fn free(self) -> T {
        self.timer
    }
}

impl<T: TickTimer> BlockingWait for Delay<T> {
    fn wait(&mut self, ticks: Ticks) {
        Delay::wait(self, ticks);
    }
}
