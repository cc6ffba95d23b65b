//! Platform Abstraction Layer
//!
//! Each supported microcontroller implements the [`Platform`] trait, which
//! hands out the peripherals the drivers are generic over.
//!
//! # Usage
//!
//! ```ignore
//! use drivers::platform::{CurrentPlatform as Board, Platform};
//! use drivers::{Delay, Stepper};
//!
//! unsafe { Board::init_interrupts(); }
//! let p = Board::take().unwrap();
//!
//! let mut delay = Delay::new(p.timer);
//! let mut stepper = Stepper::new(p.coils, &mut delay);
//! stepper.init();
//! ```

use crate::hal::gpio::Port;
use crate::hal::timer::TickTimer;

/// Peripheral handles, handed out once by [`Platform::take`].
///
/// `buttons` and `encoder` may be two handles onto the same physical port;
/// their drivers touch disjoint bit masks.
pub struct Peripherals<P: Platform> {
    pub timer: P::Timer,
    pub buttons: P::InputPort,
    pub encoder: P::InputPort,
    pub coils: P::OutputPort,
}

/// Platform trait - implemented by each supported platform
pub trait Platform: Sized {
    /// Tick timer backing the blocking wait.
    type Timer: TickTimer;
    /// Port carrying the button panel and shaft encoder.
    type InputPort: Port;
    /// Port carrying the stepper coils.
    type OutputPort: Port;

    /// Platform name for debugging
    fn name() -> &'static str;

    /// CPU clock feeding the timers.
    fn clock_hz() -> u32;

    /// Register the HAL's interrupt handlers with [`crate::irq`].
    ///
    /// # Safety
    /// Must be called before the first wait, and before the firmware's vector
    /// table starts forwarding interrupts to [`crate::irq::dispatch`].
    unsafe fn init_interrupts();

    /// Take the peripheral handles. Returns `None` after the first call.
    fn take() -> Option<Peripherals<Self>>;
}

// Platform selection based on Cargo features
cfg_if::cfg_if! {
    if #[cfg(feature = "atmega128")] {
        pub mod atmega128;
        pub use atmega128::Atmega128Platform as CurrentPlatform;
    } else {
        compile_error!(
            "No platform selected!\n\
            Use: cargo build --features atmega128"
        );
    }
}
