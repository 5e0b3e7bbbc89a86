//! Fixed-date holidays.
//!
//! Holidays are configured as `(month, day)` pairs and resolved once, when a
//! calculator is built, into concrete dates of a single reference year.  A
//! date in any other year never matches, even if it has the same month and
//! day.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wh_core::errors::{Error, Result};

/// A month/day pair, e.g. `(12, 25)` for Christmas.
///
/// Serialized as a two-element array `[month, day]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct MonthDay {
    /// Month (1–12).
    pub month: u32,
    /// Day of month (1–31).
    pub day: u32,
}

impl MonthDay {
    /// Create a month/day pair; no validation is performed.
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// 25 December.
    pub const CHRISTMAS: MonthDay = MonthDay::new(12, 25);

    /// The date in `year`, or `None` if it does not exist there.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl From<(u32, u32)> for MonthDay {
    fn from((month, day): (u32, u32)) -> Self {
        Self::new(month, day)
    }
}

impl From<MonthDay> for (u32, u32) {
    fn from(md: MonthDay) -> Self {
        (md.month, md.day)
    }
}

/// The holiday list used when none is configured: Christmas only.
pub fn default_holidays() -> Vec<MonthDay> {
    vec![MonthDay::CHRISTMAS]
}

/// Holidays resolved against a reference year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    year: i32,
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Resolve `holidays` in `year`.
    ///
    /// A pair that does not exist in `year` is an error when `strict`, and
    /// is otherwise dropped with a warning.
    pub fn resolve(holidays: &[MonthDay], year: i32, strict: bool) -> Result<Self> {
        let mut dates = BTreeSet::new();
        for md in holidays {
            match md.in_year(year) {
                Some(date) => {
                    dates.insert(date);
                }
                None if strict => {
                    return Err(Error::InvalidHoliday {
                        month: md.month,
                        day: md.day,
                        year,
                    });
                }
                None => {
                    log::warn!(
                        "dropping holiday {:02}-{:02}: no such date in {year}",
                        md.month,
                        md.day
                    );
                }
            }
        }
        Ok(Self { year, dates })
    }

    /// The reference year the holidays were anchored to.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Return `true` if `date` is one of the resolved holidays.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of resolved holidays.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if there is no holiday.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterate over the resolved dates in order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}
