//! Interrupt handler registration and dispatch.
//!
//! The firmware's vector table entries call [`dispatch`] with the vector that
//! fired; the HAL decides which handler runs. Handlers are plain function
//! pointers so dispatch stays allocation-free and bounded.

use common::arch::CurrentIrq;
use common::sync::IrqCell;

pub type Handler = fn();

/// Interrupt sources owned by the HAL.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Vector {
    /// Timer2 compare match (`TIMER2_COMP`).
    Timer2Compare,
}

const VECTOR_COUNT: usize = 1;

impl Vector {
    const fn slot(self) -> usize {
        match self {
            Vector::Timer2Compare => 0,
        }
    }
}

/// Handler table, one slot per [`Vector`].
pub struct HandlerTable {
    handlers: IrqCell<[Option<Handler>; VECTOR_COUNT], CurrentIrq>,
}

impl HandlerTable {
    pub const fn new() -> Self {
        Self {
            handlers: IrqCell::new([None; VECTOR_COUNT]),
        }
    }

    /// Install `handler` for `vector`, replacing any previous one.
    pub fn register(&self, vector: Vector, handler: Handler) {
        self.handlers
            .with(|handlers| handlers[vector.slot()] = Some(handler));
    }

    /// Remove the handler for `vector`.
    pub fn unregister(&self, vector: Vector) {
        self.handlers.with(|handlers| handlers[vector.slot()] = None);
    }

    /// Run the handler registered for `vector`.
    ///
    /// Returns `false` for a spurious interrupt (no handler registered).
    pub fn dispatch(&self, vector: Vector) -> bool {
        // Copy the pointer out so the handler runs outside the cell.
        match self.handlers.with(|handlers| handlers[vector.slot()]) {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl Default for HandlerTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Table the firmware's vectors dispatch through.
static HANDLERS: HandlerTable = HandlerTable::new();

/// Install `handler` for `vector` in the global table.
pub fn register(vector: Vector, handler: Handler) {
    HANDLERS.register(vector, handler);
}

/// Remove the handler for `vector` from the global table.
pub fn unregister(vector: Vector) {
    HANDLERS.unregister(vector);
}

/// Run the globally registered handler for `vector`. Called from the ISR.
pub fn dispatch(vector: Vector) -> bool {
    HANDLERS.dispatch(vector)
}
