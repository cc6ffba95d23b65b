//! ATmega128 GPIO ports.
//!
//! Each port has three registers: PINx (input levels), DDRx (direction, 1 =
//! output) and PORTx (output latch; for input pins a 1 enables the pull-up).

use crate::hal::gpio::{PinMode, Port, PullMode};

/// Data-space addresses of one port's registers.
#[derive(Debug, Copy, Clone)]
struct Registers {
    pin: *mut u8,
    ddr: *mut u8,
    port: *mut u8,
}

const PORT_C: Registers = Registers {
    pin: 0x33 as *mut u8,
    ddr: 0x34 as *mut u8,
    port: 0x35 as *mut u8,
};

const PORT_E: Registers = Registers {
    pin: 0x21 as *mut u8,
    ddr: 0x22 as *mut u8,
    port: 0x23 as *mut u8,
};

/// Read-modify-write of the bits in `mask`.
///
/// # Safety
///
/// `reg` must be a mapped I/O register.
unsafe fn update(reg: *mut u8, mask: u8, set: bool) {
    // SAFETY: guaranteed by the caller.
    unsafe {
        let value = reg.read_volatile();
        reg.write_volatile(if set { value | mask } else { value & !mask });
    }
}

/// Handle onto one 8-bit AVR port.
#[derive(Debug)]
pub struct AvrPort {
    regs: Registers,
}

impl AvrPort {
    /// Port C.
    ///
    /// # Safety
    ///
    /// Several handles may exist only if their users touch disjoint bits.
    pub const unsafe fn port_c() -> Self {
        Self { regs: PORT_C }
    }

    /// Port E.
    ///
    /// # Safety
    ///
    /// Several handles may exist only if their users touch disjoint bits.
    pub const unsafe fn port_e() -> Self {
        Self { regs: PORT_E }
    }
}

// SAFETY (all blocks below): the register addresses come from the two
// constructors above, which only produce mapped ATmega128 port registers.
impl Port for AvrPort {
    fn set_mode(&mut self, mask: u8, mode: PinMode) {
        unsafe { update(self.regs.ddr, mask, mode == PinMode::Output) }
    }

    fn set_pull(&mut self, mask: u8, pull: PullMode) {
        unsafe { update(self.regs.port, mask, pull == PullMode::Up) }
    }

    fn read(&self) -> u8 {
        unsafe { self.regs.pin.read_volatile() }
    }

    fn latch(&self) -> u8 {
        unsafe { self.regs.port.read_volatile() }
    }

    fn write(&mut self, value: u8) {
        unsafe { self.regs.port.write_volatile(value) }
    }
}
