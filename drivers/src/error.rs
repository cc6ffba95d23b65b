use core::fmt;

/// Errors raised when converting raw caller values into typed driver inputs.
///
/// Hardware operations themselves are infallible; these only appear at the
/// boundary where untyped values (as a C-style caller would pass them) enter
/// the driver.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Rate unit code other than 0 (slow) or 1 (fast).
    InvalidRateUnit(u8),
    /// Direction other than +1 (clockwise) or -1 (counter-clockwise).
    InvalidDirection(i8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRateUnit(code) => write!(f, "invalid timer rate unit {code}"),
            Error::InvalidDirection(dir) => write!(f, "invalid step direction {dir}"),
        }
    }
}
