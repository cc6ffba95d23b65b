//! Hardware Driver Subsystem for 8-bit AVR boards
//!
//! Blocking millisecond delays driven by a timer interrupt, push-button and
//! shaft-encoder readers, and an open-loop stepper sequencer.
//!
//! # Module Organization
//!
//! - [`hal`]: Platform-independent trait definitions
//! - [`platform`]: Platform-specific drivers (MCU level)
//! - [`tick`], [`irq`]: the interrupt-driven tick counter and the handler
//!   table the firmware's vectors dispatch through
//! - [`delay`], [`input`], [`stepper`]: drivers written against [`hal`]
//!
//! # Data Flow
//!
//! Timer compare match → [`irq::dispatch`] → tick counter → [`Delay`] polls
//! it → [`Stepper`] waits once per step → coil pins.
//!
//! # Usage Example
//!
//! ```ignore
//! use drivers::platform::{CurrentPlatform as Board, Platform};
//! use drivers::{ButtonPanel, Delay, Direction, Stepper};
//!
//! unsafe { Board::init_interrupts() };
//! let p = Board::take().unwrap();
//!
//! let mut buttons = ButtonPanel::new(p.buttons);
//! buttons.init();
//!
//! let mut stepper = Stepper::new(p.coils, Delay::new(p.timer));
//! stepper.init();
//! if buttons.read() == 1 {
//!     stepper.step(50, Direction::Clockwise);
//! }
//! ```

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod delay;
mod error;
pub mod hal;
pub mod input;
pub mod irq;
pub mod platform;
pub mod stepper;
pub mod tick;

#[cfg(test)]
mod mock;

// Re-export commonly used types
pub use delay::Delay;
pub use error::Error;
pub use hal::gpio::{PinLevel, Port};
pub use hal::timer::{BlockingWait, RateUnit, TickTimer, Ticks};
pub use input::{ButtonPanel, Rotation, ShaftEncoder};
pub use stepper::{CoilPosition, Direction, Stepper};
