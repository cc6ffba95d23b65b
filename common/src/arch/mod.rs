//! Per-architecture interrupt control.

cfg_if::cfg_if! {
    if #[cfg(target_arch = "avr")] {
        pub mod avr;
        pub use avr::AvrIrq as CurrentIrq;
    } else {
        pub mod host;
        pub use host::HostIrq as CurrentIrq;
    }
}
