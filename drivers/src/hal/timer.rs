//! Timer Hardware Abstraction Layer.
//!
//! A tick timer fires a periodic compare-match interrupt whose handler bumps
//! a tick counter. Blocking waits are built on top of it.

use crate::error::Error;

/// Tick count. Matches the native `unsigned int` of the 8-bit target.
pub type Ticks = u16;

/// Selectable tick rate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RateUnit {
    /// Millisecond ticks.
    Slow,
    /// Unprescaled ticks for short, fine-grained waits.
    Fast,
}

impl TryFrom<u8> for RateUnit {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(RateUnit::Slow),
            1 => Ok(RateUnit::Fast),
            _ => Err(Error::InvalidRateUnit(code)),
        }
    }
}

/// Timer clock prescaler.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Prescaler {
    Div1,
    Div8,
    Div64,
    Div256,
    Div1024,
}

impl Prescaler {
    /// Clock divisor.
    pub const fn divisor(self) -> u32 {
        match self {
            Prescaler::Div1 => 1,
            Prescaler::Div8 => 8,
            Prescaler::Div64 => 64,
            Prescaler::Div256 => 256,
            Prescaler::Div1024 => 1024,
        }
    }
}

/// Prescaler and compare threshold producing one tick period.
///
/// In clear-timer-on-compare mode the counter runs `0..=compare`, so a tick
/// spans `compare + 1` prescaled clocks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimerConfig {
    pub prescaler: Prescaler,
    pub compare: u8,
}

impl TimerConfig {
    /// Configuration for a rate unit. 1 ms (slow) or 15.625 us (fast)
    /// with a 16 MHz clock.
    pub const fn for_unit(unit: RateUnit) -> Self {
        match unit {
            RateUnit::Slow => TimerConfig {
                prescaler: Prescaler::Div64,
                compare: 249,
            },
            RateUnit::Fast => TimerConfig {
                prescaler: Prescaler::Div1,
                compare: 249,
            },
        }
    }

    /// Tick frequency for a given input clock.
    pub const fn tick_hz(&self, clock_hz: u32) -> u32 {
        clock_hz / (self.prescaler.divisor() * (self.compare as u32 + 1))
    }
}

/// Periodic tick timer.
///
/// There is a single logical channel: one wait at a time.
pub trait TickTimer {
    /// Reset the tick counter, program the period for `unit` and enable the
    /// compare-match interrupt. Enables interrupt delivery globally.
    fn start(&mut self, unit: RateUnit);

    /// Disable the compare-match interrupt and clear the timer
    /// configuration. The tick counter keeps its last value. Idempotent.
    fn stop(&mut self);

    /// Current tick count since the last `start`.
    fn ticks(&self) -> Ticks;
}

/// Something that can block the caller for a number of ticks.
pub trait BlockingWait {
    /// Block for at least `ticks` slow-unit ticks.
    fn wait(&mut self, ticks: Ticks);
}

impl<W: BlockingWait + ?Sized> BlockingWait for &mut W {
    fn wait(&mut self, ticks: Ticks) {
        (**self).wait(ticks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CPU_FREQ_HZ;

    #[test]
    fn slow_unit_ticks_every_millisecond() {
        assert_eq!(TimerConfig::for_unit(RateUnit::Slow).tick_hz(CPU_FREQ_HZ), 1_000);
    }

    #[test]
    fn fast_unit_ticks_at_64_khz() {
        assert_eq!(TimerConfig::for_unit(RateUnit::Fast).tick_hz(CPU_FREQ_HZ), 64_000);
    }

    #[test]
    fn raw_unit_codes() {
        assert_eq!(RateUnit::try_from(0u8), Ok(RateUnit::Slow));
        assert_eq!(RateUnit::try_from(1u8), Ok(RateUnit::Fast));
        assert_eq!(RateUnit::try_from(2u8), Err(Error::InvalidRateUnit(2)));
    }
}
