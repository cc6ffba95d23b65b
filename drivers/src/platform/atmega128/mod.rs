//! ATmega128 at 16 MHz.

pub mod gpio;
pub mod timer;

use common::arch::CurrentIrq;
use common::sync::IrqCell;

use super::{Peripherals, Platform};
use crate::config::CPU_FREQ_HZ;
use crate::irq::{self, Vector};
use gpio::AvrPort;
use timer::Timer2;

pub struct Atmega128Platform;

/// Set once the peripherals have been handed out.
static TAKEN: IrqCell<bool, CurrentIrq> = IrqCell::new(false);

impl Platform for Atmega128Platform {
    type Timer = Timer2;
    type InputPort = AvrPort;
    type OutputPort = AvrPort;

    fn name() -> &'static str {
        "ATmega128"
    }

    fn clock_hz() -> u32 {
        CPU_FREQ_HZ
    }

    unsafe fn init_interrupts() {
        log::debug!("{}: registering Timer2 compare handler", Self::name());
        irq::register(Vector::Timer2Compare, timer::on_compare_match);
    }

    fn take() -> Option<Peripherals<Self>> {
        if TAKEN.replace(true) {
            return None;
        }

        // SAFETY: guarded by TAKEN, so each handle is created exactly once.
        // Buttons and encoder share port C on disjoint bits.
        unsafe {
            Some(Peripherals {
                timer: Timer2::new(),
                buttons: AvrPort::port_c(),
                encoder: AvrPort::port_c(),
                coils: AvrPort::port_e(),
            })
        }
    }
}
