//! # workinghours
//!
//! Counts the working hours elapsed between two timestamps under a weekly
//! schedule, a lunch break, weekend days, and fixed-date holidays.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than on `wh-core` / `wh-time` directly.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use workinghours::prelude::*;
//!
//! let at = |d: u32, h: u32, m: u32| {
//!     NaiveDate::from_ymd_opt(2013, 1, d).unwrap().and_hms_opt(h, m, 0).unwrap()
//! };
//!
//! let calc = WorkingHoursCalculator::builder()
//!     .with_schedule(DaySchedule::uniform(
//!         [Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday, Weekday::Thursday, Weekday::Friday],
//!         WorkWindow::new(9.0, 17.0),
//!     ))
//!     .with_lunch(LunchWindow::new(13.0, 14.0))
//!     .with_holidays([MonthDay::CHRISTMAS])
//!     .with_reference_year(2013)
//!     .build()?;
//!
//! assert_eq!(calc.hours_between(at(23, 9, 0), at(23, 12, 30))?, 3.5);
//! assert_eq!(calc.hours_between(at(23, 10, 0), at(23, 13, 30))?, 3.5);
//! # Ok::<(), workinghours::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, error definitions, and settings.
pub use wh_core as core;

/// Schedules, holidays, and the calculator.
pub use wh_time as time;

/// The items most callers need.
pub mod prelude {
    pub use wh_core::{Error, Hours, Result, ScopedReferenceDate, Settings};
    pub use wh_time::{
        BoundaryMode, DaySchedule, LunchRule, LunchWindow, MonthDay, TimeRange, Validation,
        Weekday, WeekendPolicy, WeekendSet, WorkWindow, WorkingHoursBuilder,
        WorkingHoursCalculator, WorkingHoursConfig,
    };
}
