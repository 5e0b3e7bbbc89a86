//! `WorkingHoursConfig`: everything a calculator is built from.
//!
//! The config is plain data and round-trips through serde.  Every field has a
//! default, so a partial document only overrides what it names:
//!
//! ```
//! use wh_time::{BoundaryMode, WorkingHoursConfig};
//!
//! let config: WorkingHoursConfig = serde_json::from_str(r#"{
//!     "lunch": { "start": 12.0, "end": 12.5 },
//!     "holidays": [[1, 1], [12, 25]],
//!     "boundary": "clamped"
//! }"#).unwrap();
//!
//! assert_eq!(config.lunch.end, 12.5);
//! assert_eq!(config.holidays.len(), 2);
//! assert_eq!(config.boundary, BoundaryMode::Clamped);
//! assert_eq!(config.schedule.len(), 5);
//! ```

use serde::{Deserialize, Serialize};
use wh_core::ensure;
use wh_core::errors::{Error, Result};

use crate::holiday::{default_holidays, MonthDay};
use crate::schedule::DaySchedule;
use crate::weekday::Weekday;
use crate::weekend::WeekendPolicy;
use crate::window::{LunchRule, LunchWindow};

/// Default guard on the number of interior days walked: one hundred years.
pub const DEFAULT_MAX_SPAN_DAYS: u32 = 36_525;

/// How much checking happens when a calculator is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    /// Reject malformed windows, impossible holidays, and working days
    /// without a schedule entry.
    #[default]
    Strict,
    /// Accept anything.  Malformed input yields odd numbers, never a failure.
    Permissive,
}

/// How the first and last day of a multi-day range are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMode {
    /// Count from the start instant to that day's closing hour and from the
    /// end day's opening hour to the end instant, whatever the instants are.
    /// Boundary days are counted even on weekends and holidays, and an
    /// instant outside the window can make a contribution negative.
    #[default]
    Permissive,
    /// Clamp each instant into its day's window and skip boundary days that
    /// are weekend days or holidays.  Contributions are never negative.
    Clamped,
}

/// Configuration of a [`WorkingHoursCalculator`](crate::WorkingHoursCalculator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkingHoursConfig {
    /// Working window per weekday.
    pub schedule: DaySchedule,
    /// Daily lunch break.
    pub lunch: LunchWindow,
    /// Where the weekend comes from.
    pub weekend: WeekendPolicy,
    /// Fixed-date holidays.
    pub holidays: Vec<MonthDay>,
    /// Year the holidays are anchored to; the settings' reference year
    /// when `None`.
    pub reference_year: Option<i32>,
    /// Checks applied when building.
    pub validation: Validation,
    /// Treatment of the first and last day.
    pub boundary: BoundaryMode,
    /// Treatment of windows that partly overlap lunch.
    pub lunch_rule: LunchRule,
    /// Upper bound on interior days walked; `None` for no bound.
    pub max_span_days: Option<u32>,
}

impl Default for WorkingHoursConfig {
    fn default() -> Self {
        Self {
            schedule: DaySchedule::default(),
            lunch: LunchWindow::default(),
            weekend: WeekendPolicy::default(),
            holidays: default_holidays(),
            reference_year: None,
            validation: Validation::default(),
            boundary: BoundaryMode::default(),
            lunch_rule: LunchRule::default(),
            max_span_days: Some(DEFAULT_MAX_SPAN_DAYS),
        }
    }
}

impl WorkingHoursConfig {
    /// Check the schedule, the lunch window, and, under an explicit weekend,
    /// that every working day has a window.
    ///
    /// Holidays are checked separately, once the reference year is known.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.schedule.is_empty(), Error::EmptySchedule);

        for (day, window) in self.schedule.iter() {
            ensure!(
                window.is_valid(),
                Error::InvalidScheduleWindow {
                    weekday: day.to_string(),
                    start: window.start,
                    end: window.end,
                }
            );
        }

        ensure!(
            self.lunch.is_valid(),
            Error::InvalidLunchWindow {
                start: self.lunch.start,
                end: self.lunch.end,
            }
        );

        if let WeekendPolicy::Explicit(weekend) = &self.weekend {
            if let Some(day) = Weekday::ALL
                .into_iter()
                .find(|d| !weekend.contains(*d) && !self.schedule.contains(*d))
            {
                return Err(Error::MissingSchedule(day.to_string()));
            }
        }

        Ok(())
    }
}
