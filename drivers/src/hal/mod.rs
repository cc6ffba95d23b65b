//! Hardware Abstraction Layer (HAL) - Platform-Independent Traits
//!
//! This module defines generic traits for the peripherals the drivers
//! consume. Platform code implements them; the delay, input and stepper
//! drivers are written against them only.
//!
//! # Available Interfaces
//!
//! - [`gpio`]: 8-bit digital I/O ports
//! - [`timer`]: periodic tick timer and blocking waits

pub mod gpio;
pub mod timer;
