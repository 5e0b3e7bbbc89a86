//! Error types for workinghours.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below.  The
//! [`ensure!`](crate::ensure) and [`fail!`](crate::fail) macros provide the
//! early-return shorthand used by the validation code.

use thiserror::Error;

/// The top-level error type used throughout workinghours.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The weekly schedule has no working window at all.
    #[error("schedule must contain at least one working window")]
    EmptySchedule,

    /// A weekday's working window is out of `[0, 24]` or not ordered.
    #[error("invalid working window for {weekday}: {start}..{end}")]
    InvalidScheduleWindow {
        /// Name of the offending weekday.
        weekday: String,
        /// Window start, in fractional hours.
        start: f64,
        /// Window end, in fractional hours.
        end: f64,
    },

    /// The lunch window is out of `[0, 24]` or not ordered.
    #[error("invalid lunch window: {start}..{end}")]
    InvalidLunchWindow {
        /// Lunch start, in fractional hours.
        start: f64,
        /// Lunch end, in fractional hours.
        end: f64,
    },

    /// A `(month, day)` holiday does not exist in the reference year.
    #[error("holiday {month:02}-{day:02} does not exist in {year}")]
    InvalidHoliday {
        /// Month (1–12).
        month: u32,
        /// Day of month.
        day: u32,
        /// Year the holiday was anchored to.
        year: i32,
    },

    /// A working weekday has no entry in the schedule.
    #[error("no working window configured for {0}, which is not a weekend day")]
    MissingSchedule(String),

    /// The range between two instants is wider than the configured guard.
    #[error("span of {days} days exceeds the maximum of {max} days")]
    SpanTooLong {
        /// Number of whole days that would have to be walked.
        days: i64,
        /// Configured maximum.
        max: i64,
    },
}

/// Shorthand `Result` type used throughout workinghours.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` from the enclosing function unless `$cond` holds.
///
/// # Example
/// ```
/// use wh_core::{ensure, errors::Error};
/// fn lunch(start: f64, end: f64) -> wh_core::errors::Result<f64> {
///     ensure!(start < end, Error::InvalidLunchWindow { start, end });
///     Ok(end - start)
/// }
/// assert!(lunch(13.0, 14.0).is_ok());
/// assert!(lunch(14.0, 13.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err(::core::convert::Into::into($err));
        }
    };
}

/// Return `Err($err)` from the enclosing function unconditionally.
///
/// # Example
/// ```
/// use wh_core::{fail, errors::Error};
/// fn always_err() -> wh_core::errors::Result<()> {
///     fail!(Error::EmptySchedule);
/// }
/// assert_eq!(always_err(), Err(Error::EmptySchedule));
/// ```
#[macro_export]
macro_rules! fail {
    ($err:expr $(,)?) => {
        return Err(::core::convert::Into::into($err))
    };
}
