//! Error types for gregor.
//!
//! The calendar engine knows exactly two failure kinds: arguments that fail
//! range validation, and operations that need a value from a null or invalid
//! instance. Both map to variants of a single `thiserror`-derived enum.
//! The `ensure!` and `fail!` convenience macros defined here build the
//! `InvalidInput` variant.

use thiserror::Error;

/// The top-level error type used throughout gregor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Construction or setter arguments failed range validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A value was requested from a null time or an invalid date.
    #[error("null value")]
    NullValue,
}

/// Shorthand `Result` type used throughout gregor.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidInput(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use gregor_core::{ensure, errors::Error};
/// fn month(m: u8) -> gregor_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(12).is_ok());
/// assert_eq!(
///     month(13),
///     Err(Error::InvalidInput("month 13 out of range [1, 12]".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidInput(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::InvalidInput(...))` immediately.
///
/// # Example
/// ```
/// use gregor_core::{fail, errors::Error};
/// fn never() -> gregor_core::errors::Result<()> {
///     fail!("unexpected character {:?}", 'x');
/// }
/// assert!(matches!(never(), Err(Error::InvalidInput(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidInput(format!($($msg)*)))
    };
}
