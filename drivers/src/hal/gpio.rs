//! GPIO (General Purpose Input/Output) Hardware Abstraction Layer.
//!
//! Pins are grouped into 8-bit ports, as on the AVR family. Every operation
//! takes a bit mask so that several drivers can share one port as long as
//! their masks do not overlap.

/// Pin logic level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PinLevel {
    /// Logic low (0V or ground).
    Low,
    /// Logic high (VCC).
    High,
}

impl From<bool> for PinLevel {
    fn from(value: bool) -> Self {
        if value {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }
}

impl From<PinLevel> for bool {
    fn from(level: PinLevel) -> bool {
        matches!(level, PinLevel::High)
    }
}

/// Pin direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PinMode {
    Input,
    Output,
}

/// Internal pull resistor configuration.
///
/// AVR ports only offer pull-ups.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PullMode {
    /// No pull resistor (high impedance).
    None,
    /// Enable internal pull-up resistor.
    Up,
}

/// 8-bit digital I/O port.
///
/// All operations are infallible: a port is a set of registers, and writing
/// them always succeeds.
pub trait Port {
    /// Set the direction of every pin in `mask`.
    fn set_mode(&mut self, mask: u8, mode: PinMode);

    /// Configure the pull resistor of every input pin in `mask`.
    fn set_pull(&mut self, mask: u8, pull: PullMode);

    /// Sample the input levels of all eight pins.
    fn read(&self) -> u8;

    /// Read back the output latch.
    fn latch(&self) -> u8;

    /// Overwrite the output latch.
    fn write(&mut self, value: u8);

    /// Sample the level of a single pin.
    fn level(&self, bit: u8) -> PinLevel {
        ((self.read() >> bit) & 0x01 != 0).into()
    }

    /// Replace the latch bits in `mask` with the matching bits of `bits`,
    /// leaving the others untouched.
    fn modify(&mut self, mask: u8, bits: u8) {
        let value = (self.latch() & !mask) | (bits & mask);
        self.write(value);
    }

    /// Drive every pin in `mask` low.
    fn clear_bits(&mut self, mask: u8) {
        self.modify(mask, 0);
    }
}
