//! Tick Counter
//!
//! Incremented once per tick by the timer's compare-match handler and polled
//! by the blocking wait. The counter lives in an [`IrqCell`], so reads from
//! the main line never observe a half-updated 16-bit value.

use common::sync::IrqCell;
use common::sync::irq::IrqControl;

use crate::hal::timer::Ticks;

/// Interrupt-shared tick counter.
///
/// Wraps to zero after `Ticks::MAX`. A wait never lasts long enough to see
/// this: its duration is itself a `Ticks`, so the poll loop exits at the
/// latest when the counter reaches `Ticks::MAX`.
pub struct TickCounter<I: IrqControl> {
    count: IrqCell<Ticks, I>,
}

impl<I: IrqControl> TickCounter<I> {
    pub const fn new() -> Self {
        Self {
            count: IrqCell::new(0),
        }
    }

    pub fn reset(&self) {
        self.count.set(0);
    }

    pub fn get(&self) -> Ticks {
        self.count.get()
    }

    /// Advance by one tick. Called from interrupt context.
    #[inline(always)]
    pub fn increment(&self) {
        self.count.with(|count| *count = count.wrapping_add(1));
    }
}

impl<I: IrqControl> Default for TickCounter<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::arch::host::HostIrq;

    #[test]
    fn counts_and_resets() {
        let ticks: TickCounter<HostIrq> = TickCounter::new();
        for _ in 0..5 {
            ticks.increment();
        }
        assert_eq!(ticks.get(), 5);

        ticks.reset();
        assert_eq!(ticks.get(), 0);
    }

    #[test]
    fn wraps_at_native_width() {
        let ticks: TickCounter<HostIrq> = TickCounter::new();
        ticks.count.set(Ticks::MAX);
        ticks.increment();
        assert_eq!(ticks.get(), 0);
    }
}
