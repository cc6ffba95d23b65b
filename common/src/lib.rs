//! Architecture primitives shared by the drivers.
//!
//! - [`sync`]: interrupt masking and interrupt-safe shared state
//! - [`arch`]: per-architecture [`sync::irq::IrqControl`] implementations

#![cfg_attr(not(test), no_std)]

pub mod arch;
pub mod sync;
