//! Error types for courtdays.
//!
//! Every fallible operation in the workspace returns [`Result`] with the
//! single `thiserror`-derived [`Error`] enum below.  The `ensure!` and
//! `fail!` macros give early-return shorthands for preconditions.

use thiserror::Error;

/// The top-level error type used throughout courtdays.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A year/month/day combination that does not exist (e.g. February 30).
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// The date lies outside the window in which Sakamoto's weekday formula
    /// is valid (1752-09-14 to 9999-12-31).
    #[error("weekday undefined for {year:04}-{month:02}-{day:02}: outside 1752-09-14..=9999-12-31")]
    WeekdayOutOfRange {
        /// Year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: u8,
        /// Day of the rejected date.
        day: u8,
    },

    /// A Julian Day Number outside the supported years 1–9999.
    #[error("julian day number {0} outside the supported range")]
    JdnOutOfRange(i64),

    /// A holiday rule whose payload is inconsistent (unknown weekday, day 0…).
    #[error("invalid holiday rule: {0}")]
    InvalidRule(String),

    /// Text could not be parsed into a date, weekday, month, or number.
    #[error("parse error: {0}")]
    Parse(String),

    /// Configuration could not be loaded or deserialised.
    #[error("configuration error: {0}")]
    Config(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout courtdays.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Self {
        Error::Config(e.to_string())
    }
}

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cd_core::{ensure, errors::Error};
/// fn positive(x: i64) -> cd_core::errors::Result<i64> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use cd_core::{fail, errors::Error};
/// fn always_err() -> cd_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
