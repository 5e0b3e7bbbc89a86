//! # wh-time
//!
//! Weekly schedules, lunch windows, weekends, holidays, and the
//! working-hours calculator built on them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `WorkingHoursCalculator`, its builder, and `TimeRange`.
pub mod calculator;

/// `WorkingHoursConfig` and the validation / boundary modes.
pub mod config;

/// Fixed month/day holidays and their resolution in a reference year.
pub mod holiday;

/// `DaySchedule`: working window per weekday.
pub mod schedule;

/// `Weekday`: day of the week.
pub mod weekday;

/// `WeekendSet` and `WeekendPolicy`.
pub mod weekend;

/// Working and lunch windows, fractional-hour conversion.
pub mod window;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calculator::{TimeRange, WorkingHoursBuilder, WorkingHoursCalculator};
pub use config::{BoundaryMode, Validation, WorkingHoursConfig, DEFAULT_MAX_SPAN_DAYS};
pub use holiday::{HolidaySet, MonthDay};
pub use schedule::DaySchedule;
pub use weekday::Weekday;
pub use weekend::{WeekendPolicy, WeekendSet};
pub use window::{LunchRule, LunchWindow, WorkWindow};
