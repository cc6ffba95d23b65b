//! Board configuration.
//!
//! Wiring and clock constants for the reference board: an ATmega128 at
//! 16 MHz with the button panel and shaft encoder on port C and the stepper
//! driver on the high nibble of port E.

use crate::hal::timer::Ticks;

/// CPU clock feeding the timer prescalers.
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// Number of push buttons on the panel.
pub const BUTTON_COUNT: u8 = 6;
/// Port bits wired to the push buttons (PC0..PC5).
pub const BUTTON_MASK: u8 = 0x3F;

/// Lowest port bit of the encoder switch pair.
pub const ENCODER_SHIFT: u8 = 6;
/// Port bits wired to the encoder switches (PC6..PC7).
pub const ENCODER_MASK: u8 = 0xC0;

/// Lowest port bit of the stepper coil outputs.
pub const COIL_SHIFT: u8 = 4;
/// Port bits driving the stepper coils (PE4..PE7).
pub const COIL_MASK: u8 = 0xF0;

/// Wait after each step so the rotor settles before the next one.
pub const STEP_SETTLE_TICKS: Ticks = 2;

/// Full steps per shaft revolution (1.8 degrees per step).
pub const STEPS_PER_REVOLUTION: u16 = 200;
