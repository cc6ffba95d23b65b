//! Open-loop driver for a 4-phase unipolar stepper motor.
//!
//! One coil is energised at a time (wave drive). The sequencer remembers the
//! energised phase between calls so consecutive moves continue the rotation
//! where the previous one left off. Coils are released after every move so
//! the rotor turns freely while idle.

use crate::config::{COIL_MASK, COIL_SHIFT, STEP_SETTLE_TICKS, STEPS_PER_REVOLUTION};
use crate::error::Error;
use crate::hal::gpio::{PinMode, Port};
use crate::hal::timer::BlockingWait;

/// Rotation direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// `Some` for `1` or `-1`, `None` for any other value.
    pub fn from_sign(sign: i8) -> Option<Self> {
        Self::try_from(sign).ok()
    }
}

impl TryFrom<i8> for Direction {
    type Error = Error;

    /// `1` is clockwise, `-1` counter-clockwise.
    fn try_from(sign: i8) -> Result<Self, Self::Error> {
        match sign {
            1 => Ok(Direction::Clockwise),
            -1 => Ok(Direction::CounterClockwise),
            _ => Err(Error::InvalidDirection(sign)),
        }
    }
}

/// Energised coil as a one-hot nibble: `0b0001`, `0b0010`, `0b0100` or
/// `0b1000`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CoilPosition(u8);

impl CoilPosition {
    /// Phase the sequencer starts from.
    pub const REST: CoilPosition = CoilPosition(0b0001);

    const LAST: u8 = 0b1000;

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn clockwise(self) -> Self {
        if self.0 == Self::LAST {
            CoilPosition(0b0001)
        } else {
            CoilPosition(self.0 << 1)
        }
    }

    pub const fn counter_clockwise(self) -> Self {
        if self.0 == 0b0001 {
            CoilPosition(Self::LAST)
        } else {
            CoilPosition(self.0 >> 1)
        }
    }

    pub const fn advance(self, direction: Direction) -> Self {
        match direction {
            Direction::Clockwise => self.clockwise(),
            Direction::CounterClockwise => self.counter_clockwise(),
        }
    }
}

impl Default for CoilPosition {
    fn default() -> Self {
        Self::REST
    }
}

/// Steps needed to turn the shaft by `degrees`, rounded to the nearest step.
pub const fn steps_for_degrees(degrees: u16) -> u16 {
    let revolution = STEPS_PER_REVOLUTION as u32;
    ((degrees as u32 * revolution + 180) / 360) as u16
}

/// Stepper sequencer driving the coil pins of `P` and pausing with `W`.
#[derive(Debug)]
pub struct Stepper<P: Port, W: BlockingWait> {
    port: P,
    wait: W,
    position: CoilPosition,
}

impl<P: Port, W: BlockingWait> Stepper<P, W> {
    pub fn new(port: P, wait: W) -> Self {
        Self {
            port,
            wait,
            position: CoilPosition::REST,
        }
    }

    /// Configure the coil pins as outputs and pull the rotor onto the rest
    /// phase, then release the coils.
    pub fn init(&mut self) {
        log::debug!("stepper: init, coils on mask {COIL_MASK:#04x}");

        self.port.set_mode(COIL_MASK, PinMode::Output);
        self.position = CoilPosition::REST;
        self.energize();
        self.wait.wait(STEP_SETTLE_TICKS);
        self.release();
    }

    /// Move `num_steps` full steps in `direction`, pausing
    /// [`STEP_SETTLE_TICKS`] after each, then release the coils.
    ///
    /// The motor has 200 steps per revolution; larger counts simply keep
    /// turning.
    pub fn step(&mut self, num_steps: u16, direction: Direction) {
        log::trace!("stepper: {num_steps} steps {direction:?}");

        for _ in 0..num_steps {
            self.position = self.position.advance(direction);
            self.energize();
            self.wait.wait(STEP_SETTLE_TICKS);
        }

        self.release();
    }

    /// [`Stepper::step`] with the direction given as `1` or `-1`.
    ///
    /// Any other direction moves nothing but still releases the coils.
    pub fn step_signed(&mut self, num_steps: u16, direction: i8) {
        match Direction::from_sign(direction) {
            Some(direction) => self.step(num_steps, direction),
            None => {
                log::trace!("stepper: direction {direction} ignored");
                self.release();
            }
        }
    }

    /// Currently selected phase. Kept while the coils are released.
    pub fn position(&self) -> CoilPosition {
        self.position
    }

    /// De-energise all coils.
    pub fn release(&mut self) {
        self.port.clear_bits(COIL_MASK);
    }

    pub fn free(self) -> (P, W) {
        (self.port, self.wait)
    }

    fn energize(&mut self) {
        self.port.modify(COIL_MASK, self.position.bits() << COIL_SHIFT);
    }
}
