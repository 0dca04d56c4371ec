//! Error types for metron.
//!
//! All validation failures share one `thiserror`-derived enum: callers see a
//! single error type whose variants differ only in message, never a tree of
//! exception classes. The [`ensure!`] macro covers the common
//! check-a-numeric-bound-and-bail pattern.

use thiserror::Error;

/// The top-level error type used throughout metron.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A period code does not match its kind's grammar.
    #[error("malformed period code: {0}")]
    MalformedCode(String),

    /// A numeric component of a code is outside its kind's bounds.
    #[error("component out of range: {0}")]
    OutOfRange(String),

    /// A prefix letter or kind name not present in the kind registry.
    #[error("unknown period kind: {0}")]
    UnknownKind(String),

    /// Two codes that must share a kind do not.
    #[error("period kind mismatch: {0}")]
    KindMismatch(String),

    /// A sub-period request outside the containment hierarchy.
    #[error("illegal containment: {0}")]
    Containment(String),

    /// Calendar-date error (out-of-range year, day, or serial).
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout metron.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::OutOfRange(...))` unless `$cond` holds.
///
/// # Example
/// ```
/// use metron_core::{ensure, errors::Result};
/// fn check(week: u8) -> Result<()> {
///     ensure!((1..=53).contains(&week), "week {week} outside [1, 53]");
///     Ok(())
/// }
/// assert!(check(32).is_ok());
/// assert!(check(75).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::OutOfRange(
                format!($($msg)*)
            ));
        }
    };
}
