//! Interrupt control for host builds (simulation and unit tests).
//!
//! There is no interrupt to mask on the host, so "interrupts disabled" is
//! modelled as holding a global flag. Simulated ISRs run on the same thread
//! as the code they interrupt and therefore never contend for it.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::sync::irq::IrqControl;

/// Set while some context holds interrupts masked.
static MASKED: AtomicBool = AtomicBool::new(false);

pub struct HostIrq;

impl IrqControl for HostIrq {
    type State = ();

    fn disable() {
        while MASKED
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            core::hint::spin_loop();
        }
    }

    fn restore(_state: ()) {
        MASKED.store(false, Ordering::Release);
    }

    fn enable() {}
}
