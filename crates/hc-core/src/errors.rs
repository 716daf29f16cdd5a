//! Error types for holcal.
//!
//! A single `thiserror`-derived enum shared by every crate in the
//! workspace, plus the `ensure!` convenience macro for argument checks.

use thiserror::Error;

/// The top-level error type used throughout the holcal workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Date construction or arithmetic left the valid domain.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A year outside the window in which a calendrical method is valid.
    #[error("year {year} out of supported range [{min}, {max}]")]
    YearOutOfRange {
        /// The rejected year.
        year: u16,
        /// First supported year.
        min: u16,
        /// Last supported year.
        max: u16,
    },
}

/// Shorthand `Result` type used throughout the holcal workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hc_core::ensure;
/// fn first(years: &[u16]) -> hc_core::Result<u16> {
///     ensure!(!years.is_empty(), "at least one year is required");
///     Ok(years[0])
/// }
/// assert!(first(&[2025]).is_ok());
/// assert!(first(&[]).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::Date("day 32 out of range".into()).to_string(),
            "date error: day 32 out of range"
        );
        assert_eq!(
            Error::InvalidArgument("empty year list".into()).to_string(),
            "invalid argument: empty year list"
        );
        assert_eq!(
            Error::YearOutOfRange {
                year: 1500,
                min: 1583,
                max: 4099
            }
            .to_string(),
            "year 1500 out of supported range [1583, 4099]"
        );
    }

    #[test]
    fn ensure_passes_and_fails() {
        fn check(n: u16) -> Result<u16> {
            ensure!(n > 0, "n must be positive, got {n}");
            Ok(n)
        }
        assert_eq!(check(3), Ok(3));
        assert_eq!(
            check(0),
            Err(Error::InvalidArgument("n must be positive, got 0".into()))
        );
    }
}
