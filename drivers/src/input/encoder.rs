//! Quadrature shaft encoder with two active-low switches.
//!
//! Only transitions leaving the "both released" state count. Once a detent
//! has been reported, the reader waits for the switches to return to the
//! released state before it reports again, so a single detent is not
//! counted twice when the reader is called faster than the switches settle.

use crate::config::{ENCODER_MASK, ENCODER_SHIFT};
use crate::hal::gpio::{PinMode, Port, PullMode};

/// Both switches open (pulled high).
const RELEASED: u8 = 0b11;
/// First switch still open, second closed.
const FIRST_ACTIVE: u8 = 0b01;
/// First switch closed, second still open.
const SECOND_ACTIVE: u8 = 0b10;

/// Rotation observed by one [`ShaftEncoder::read`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rotation {
    Still,
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// Signed step: +1, -1 or 0.
    pub const fn delta(self) -> i8 {
        match self {
            Rotation::Still => 0,
            Rotation::Clockwise => 1,
            Rotation::CounterClockwise => -1,
        }
    }
}

impl From<Rotation> for i8 {
    fn from(rotation: Rotation) -> i8 {
        rotation.delta()
    }
}

/// Shaft encoder on the top two bits of a port.
#[derive(Debug)]
pub struct ShaftEncoder<P: Port> {
    port: P,
    previous: u8,
}

impl<P: Port> ShaftEncoder<P> {
    pub fn new(port: P) -> Self {
        Self {
            port,
            previous: RELEASED,
        }
    }

    /// Configure the encoder pins as inputs with pull-ups.
    pub fn init(&mut self) {
        self.port.set_mode(ENCODER_MASK, PinMode::Input);
        self.port.set_pull(ENCODER_MASK, PullMode::Up);
    }

    /// Sample the switches and report the rotation since the last call.
    pub fn read(&mut self) -> Rotation {
        let current = (self.port.read() & ENCODER_MASK) >> ENCODER_SHIFT;

        let rotation = if self.previous == RELEASED {
            match current {
                FIRST_ACTIVE => Rotation::Clockwise,
                SECOND_ACTIVE => Rotation::CounterClockwise,
                _ => Rotation::Still,
            }
        } else {
            Rotation::Still
        };

        self.previous = current;
        rotation
    }

    /// Switch pattern seen by the last `read`.
    pub fn previous(&self) -> u8 {
        self.previous
    }

    pub fn free(self) -> P {
        self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPort;

    fn switches(port: &MockPort, pattern: u8) {
        // Buttons all released; pattern goes in the top two bits.
        port.set_input((pattern << ENCODER_SHIFT) | 0x3F);
    }

    #[test]
    fn starts_released() {
        let encoder = ShaftEncoder::new(MockPort::new());
        assert_eq!(encoder.previous(), RELEASED);
    }

    #[test]
    fn clockwise_detent_reported_once() {
        let port = MockPort::new();
        let mut encoder = ShaftEncoder::new(port.clone());

        switches(&port, 0b01);
        assert_eq!(encoder.read().delta(), 1);
        assert_eq!(encoder.previous(), 0b01);

        // Same sample again: previous is no longer released.
        assert_eq!(encoder.read().delta(), 0);
    }

    #[test]
    fn counter_clockwise_detent() {
        let port = MockPort::new();
        let mut encoder = ShaftEncoder::new(port.clone());

        switches(&port, 0b10);
        assert_eq!(encoder.read(), Rotation::CounterClockwise);
        assert_eq!(i8::from(Rotation::CounterClockwise), -1);
    }

    #[test]
    fn no_change_and_both_closed_are_still() {
        let port = MockPort::new();
        let mut encoder = ShaftEncoder::new(port.clone());

        switches(&port, 0b11);
        assert_eq!(encoder.read(), Rotation::Still);

        switches(&port, 0b00);
        assert_eq!(encoder.read(), Rotation::Still);
        assert_eq!(encoder.previous(), 0b00);
    }

    #[test]
    fn transitions_not_leaving_released_are_ignored() {
        let port = MockPort::new();
        let mut encoder = ShaftEncoder::new(port.clone());

        switches(&port, 0b00);
        encoder.read();
        switches(&port, 0b01);
        assert_eq!(encoder.read(), Rotation::Still);
        switches(&port, 0b11);
        assert_eq!(encoder.read(), Rotation::Still);
        switches(&port, 0b10);
        assert_eq!(encoder.read(), Rotation::CounterClockwise);
    }

    #[test]
    fn button_bits_do_not_leak_into_pattern() {
        let port = MockPort::new();
        let mut encoder = ShaftEncoder::new(port.clone());

        port.set_input(0b0100_0000);
        assert_eq!(encoder.read(), Rotation::Clockwise);
    }

    #[test]
    fn init_touches_encoder_pins_only() {
        let port = MockPort::new();
        let mut encoder = ShaftEncoder::new(port.clone());
        encoder.init();
        assert_eq!(port.state().pullups, ENCODER_MASK);
    }
}
