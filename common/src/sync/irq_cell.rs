use core::{cell::UnsafeCell, marker::PhantomData};

use super::irq::IrqControl;

/// Interrupt-safe cell for single-core targets.
///
/// - Disables interrupts for the duration of every access
/// - Restores the previous interrupt state afterwards
///
/// Safe to use from:
/// - ISR context (interrupts are already masked there)
/// - Normal execution context
///
/// Values wider than the native word (a `u16` on an 8-bit core) are read
/// and written without tearing, because the ISR cannot run in between.
///
/// Not reentrant: the closure passed to [`IrqCell::with`] must not touch
/// the same cell again.
pub struct IrqCell<T, I: IrqControl> {
    data: UnsafeCell<T>,
    _irq: PhantomData<fn() -> I>,
}

// SAFETY: every access happens with interrupts masked, which on a single
// core serialises the main line against ISRs.
unsafe impl<T: Send, I: IrqControl> Sync for IrqCell<T, I> {}

impl<T, I: IrqControl> IrqCell<T, I> {
    /// Create a new cell.
    pub const fn new(data: T) -> Self {
        Self {
            data: UnsafeCell::new(data),
            _irq: PhantomData,
        }
    }

    /// Run `f` with exclusive access to the value, interrupts masked.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let state = I::disable();

        // SAFETY: interrupts are masked, so no other context can observe
        // the value until `restore` below.
        let result = f(unsafe { &mut *self.data.get() });

        I::restore(state);
        result
    }

    /// Store a new value.
    pub fn set(&self, value: T) {
        self.with(|data| *data = value);
    }

    /// Store a new value and return the old one.
    pub fn replace(&self, value: T) -> T {
        self.with(|data| core::mem::replace(data, value))
    }
}

impl<T: Copy, I: IrqControl> IrqCell<T, I> {
    /// Read a copy of the value.
    pub fn get(&self) -> T {
        self.with(|data| *data)
    }
}
