use core::sync::atomic::{Ordering, compiler_fence};

use crate::sync::irq::IrqControl;

/// Status register, data-space address (I/O address 0x3F).
const SREG: *mut u8 = 0x5F as *mut u8;

/// Global interrupt enable bit in SREG.
const SREG_I_BIT: u8 = 1 << 7;

pub struct AvrIrq;

/// Interrupt control for 8-bit AVR cores.
///
/// # State Management
/// The `State` type is `bool`: whether the I bit was set before `disable()`.
///
/// The I bit is manipulated through a read-modify-write of SREG. An ISR
/// firing between the read and the write is harmless: every ISR epilogue
/// restores SREG, so the value written back is still current.
///
/// SREG accesses are volatile, which orders them only against other volatile
/// accesses. Compiler fences after masking and before unmasking keep plain
/// memory accesses of the critical section inside the masked window.
impl IrqControl for AvrIrq {
    type State = bool;

    #[inline(always)]
    fn disable() -> bool {
        // SAFETY: SREG is always mapped on AVR.
        unsafe {
            let sreg = SREG.read_volatile();
            SREG.write_volatile(sreg & !SREG_I_BIT);
            compiler_fence(Ordering::SeqCst);
            sreg & SREG_I_BIT != 0
        }
    }

    #[inline(always)]
    fn restore(prev_enabled: bool) {
        compiler_fence(Ordering::SeqCst);
        if prev_enabled {
            Self::enable();
        }
    }

    #[inline(always)]
    fn enable() {
        compiler_fence(Ordering::SeqCst);
        // SAFETY: SREG is always mapped on AVR.
        unsafe {
            let sreg = SREG.read_volatile();
            SREG.write_volatile(sreg | SREG_I_BIT);
        }
    }
}
