//! Digital input readers.
//!
//! Both readers sample raw port levels on demand; neither debounces beyond
//! what its decoding rule implies. Call them often.

pub mod buttons;
pub mod encoder;

pub use buttons::ButtonPanel;
pub use encoder::{Rotation, ShaftEncoder};
