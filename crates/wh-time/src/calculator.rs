//! `WorkingHoursCalculator`: working hours elapsed between two instants.
//!
//! A range is split into up to three parts:
//!
//! * **same day**: both instants on one date: the span between them, less
//!   lunch;
//! * **boundary days**: from the start instant to the closing hour of its
//!   day, and from the opening hour of the end day to the end instant;
//! * **interior days**: every date strictly between the two, counted in
//!   full unless it is a weekend day or a holiday.
//!
//! A boundary day that falls on a weekend day is measured against Monday's
//! window.  Under [`BoundaryMode::Clamped`] such days contribute nothing and
//! instants are clamped into their day's window instead.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use wh_core::errors::{Error, Result};
use wh_core::{Hours, Settings};

use crate::config::{BoundaryMode, Validation, WorkingHoursConfig};
use crate::holiday::{HolidaySet, MonthDay};
use crate::schedule::DaySchedule;
use crate::weekday::Weekday;
use crate::weekend::{WeekendPolicy, WeekendSet};
use crate::window::{fractional_hour, LunchRule, LunchWindow, WorkWindow};

/// Two instants in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeRange {
    /// Order `a` and `b` into a range; the arguments may come in any order.
    pub fn new(a: NaiveDateTime, b: NaiveDateTime) -> Self {
        if a > b {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    /// The earlier instant.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// The later instant.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Return `true` if both instants are identical.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Return `true` if both instants fall on the same calendar date.
    pub fn is_same_day(&self) -> bool {
        self.start.date() == self.end.date()
    }

    /// Number of calendar dates strictly between the start and end dates.
    pub fn interior_days(&self) -> i64 {
        let days = (self.end.date() - self.start.date()).num_days();
        (days - 1).max(0)
    }

    /// The dates strictly between the start and end dates.
    pub fn interior_dates(&self) -> impl Iterator<Item = NaiveDate> {
        let count = usize::try_from(self.interior_days()).unwrap_or(usize::MAX);
        self.start.date().iter_days().skip(1).take(count)
    }
}

/// Computes working hours over a fixed configuration.
///
/// The calculator is immutable once built and can be shared freely between
/// threads.
///
/// ```
/// use chrono::NaiveDate;
/// use wh_time::WorkingHoursCalculator;
///
/// let at = |d: u32, h: u32, m: u32| {
///     NaiveDate::from_ymd_opt(2013, 1, d).unwrap().and_hms_opt(h, m, 0).unwrap()
/// };
///
/// let calc = WorkingHoursCalculator::builder()
///     .with_reference_year(2013)
///     .build()
///     .unwrap();
///
/// // Wednesday 09:30 to 16:00, lunch 13:00-14:00.
/// assert_eq!(calc.hours_between(at(23, 9, 30), at(23, 16, 0)).unwrap(), 5.5);
/// // Friday 15:00 to Monday 10:00 skips the weekend.
/// assert_eq!(calc.hours_between(at(28, 10, 0), at(25, 15, 0)).unwrap(), 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct WorkingHoursCalculator {
    schedule: DaySchedule,
    lunch: LunchWindow,
    weekend: WeekendSet,
    holidays: HolidaySet,
    boundary: BoundaryMode,
    lunch_rule: LunchRule,
    max_span_days: Option<u32>,
}

impl WorkingHoursCalculator {
    /// Build a calculator from `config`.
    ///
    /// Holidays are anchored to `config.reference_year`, or to the year of
    /// [`Settings::reference_date`] if that is `None`.  The year is read once,
    /// here.
    ///
    /// # Errors
    /// Under [`Validation::Strict`], any error from
    /// [`WorkingHoursConfig::validate`] and [`Error::InvalidHoliday`] for a
    /// holiday that does not exist in the reference year.
    pub fn new(config: WorkingHoursConfig) -> Result<Self> {
        let strict = config.validation == Validation::Strict;
        if strict {
            config.validate()?;
        }

        let year = config
            .reference_year
            .unwrap_or_else(|| Settings::instance().reference_year());
        let holidays = HolidaySet::resolve(&config.holidays, year, strict)?;
        let weekend = config.weekend.resolve(&config.schedule);

        log::debug!(
            "working-hours calculator: weekend {:?}, holidays {:?}, boundary {:?}, lunch rule {:?}",
            weekend.to_vec(),
            holidays.iter().collect::<Vec<_>>(),
            config.boundary,
            config.lunch_rule,
        );

        Ok(Self {
            schedule: config.schedule,
            lunch: config.lunch,
            weekend,
            holidays,
            boundary: config.boundary,
            lunch_rule: config.lunch_rule,
            max_span_days: config.max_span_days,
        })
    }

    /// Begin building a calculator from the default configuration.
    pub fn builder() -> WorkingHoursBuilder {
        WorkingHoursBuilder::new()
    }

    /// The weekly schedule.
    pub fn schedule(&self) -> &DaySchedule {
        &self.schedule
    }

    /// The lunch window.
    pub fn lunch(&self) -> LunchWindow {
        self.lunch
    }

    /// The resolved weekend.
    pub fn weekend(&self) -> &WeekendSet {
        &self.weekend
    }

    /// The holidays, resolved in the reference year.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Return `true` unless `date` is a weekend day or a holiday.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.weekend.contains(date.weekday().into()) && !self.holidays.contains(date)
    }

    /// Working hours between `a` and `b`, in either order.
    ///
    /// # Errors
    /// [`Error::SpanTooLong`] if more interior days would have to be walked
    /// than the configured maximum.
    pub fn hours_between(&self, a: NaiveDateTime, b: NaiveDateTime) -> Result<Hours> {
        self.hours(TimeRange::new(a, b))
    }

    /// Working hours within `range`.
    ///
    /// # Errors
    /// See [`hours_between`](Self::hours_between).
    pub fn hours(&self, range: TimeRange) -> Result<Hours> {
        if range.is_empty() {
            return Ok(0.0);
        }

        let (start, end) = (range.start(), range.end());
        let start_hour = fractional_hour(&start);
        let end_hour = fractional_hour(&end);

        if range.is_same_day() {
            let total = self.same_day_hours(start.date(), start_hour, end_hour);
            log::trace!("{start} .. {end}: {total} hours (same day)");
            return Ok(total);
        }

        let interior = range.interior_days();
        if let Some(max) = self.max_span_days {
            if interior > i64::from(max) {
                wh_core::fail!(Error::SpanTooLong {
                    days: interior,
                    max: i64::from(max),
                });
            }
        }

        let mut total = self.opening_day_hours(start.date(), start_hour)
            + self.closing_day_hours(end.date(), end_hour);

        for date in range.interior_dates() {
            if !self.is_working_day(date) {
                continue;
            }
            let day = Weekday::from(date.weekday());
            match self.schedule.get(day) {
                Some(window) => total += self.hours_for_window(window),
                None => log::warn!("no working window for {day}; {date} counts as zero hours"),
            }
        }

        log::trace!("{start} .. {end}: {total} hours over {interior} interior days");
        Ok(total)
    }

    /// Hours in `window` once lunch is taken out.
    pub fn hours_for_window(&self, window: WorkWindow) -> Hours {
        window.working_hours(&self.lunch, self.lunch_rule)
    }

    /// The window a boundary day is measured against.  Weekend days fall
    /// back to Monday's window.
    fn boundary_window(&self, day: Weekday) -> Option<WorkWindow> {
        let lookup = if self.weekend.contains(day) {
            Weekday::Monday
        } else {
            day
        };
        let window = self.schedule.get(lookup);
        if window.is_none() {
            log::warn!("no working window for {lookup}; boundary {day} counts as zero hours");
        }
        window
    }

    /// The window of a working boundary day in clamped mode.
    fn clamped_window(&self, date: NaiveDate) -> Option<WorkWindow> {
        if !self.is_working_day(date) {
            return None;
        }
        let day = Weekday::from(date.weekday());
        let window = self.schedule.get(day);
        if window.is_none() {
            log::warn!("no working window for {day}; {date} counts as zero hours");
        }
        window
    }

    fn same_day_hours(&self, date: NaiveDate, start_hour: Hours, end_hour: Hours) -> Hours {
        match self.boundary {
            BoundaryMode::Permissive => self.hours_for_window(WorkWindow::new(start_hour, end_hour)),
            BoundaryMode::Clamped => match self.clamped_window(date) {
                Some(w) => self.clamped_hours(w.clamp(start_hour), w.clamp(end_hour)),
                None => 0.0,
            },
        }
    }

    fn opening_day_hours(&self, date: NaiveDate, start_hour: Hours) -> Hours {
        match self.boundary {
            BoundaryMode::Permissive => self
                .boundary_window(date.weekday().into())
                .map_or(0.0, |w| self.hours_for_window(WorkWindow::new(start_hour, w.end))),
            BoundaryMode::Clamped => self
                .clamped_window(date)
                .map_or(0.0, |w| self.clamped_hours(w.clamp(start_hour), w.end)),
        }
    }

    fn closing_day_hours(&self, date: NaiveDate, end_hour: Hours) -> Hours {
        match self.boundary {
            BoundaryMode::Permissive => self
                .boundary_window(date.weekday().into())
                .map_or(0.0, |w| self.hours_for_window(WorkWindow::new(w.start, end_hour))),
            BoundaryMode::Clamped => self
                .clamped_window(date)
                .map_or(0.0, |w| self.clamped_hours(w.start, w.clamp(end_hour))),
        }
    }

    fn clamped_hours(&self, start: Hours, end: Hours) -> Hours {
        if end <= start {
            return 0.0;
        }
        self.hours_for_window(WorkWindow::new(start, end)).max(0.0)
    }
}

impl TryFrom<WorkingHoursConfig> for WorkingHoursCalculator {
    type Error = Error;

    fn try_from(config: WorkingHoursConfig) -> Result<Self> {
        Self::new(config)
    }
}

/// Builder for [`WorkingHoursCalculator`].
///
/// Starts from [`WorkingHoursConfig::default`].
#[derive(Debug, Clone, Default)]
pub struct WorkingHoursBuilder {
    config: WorkingHoursConfig,
}

impl WorkingHoursBuilder {
    /// Begin from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin from an existing configuration.
    pub fn from_config(config: WorkingHoursConfig) -> Self {
        Self { config }
    }

    /// Set the weekly schedule.
    pub fn with_schedule(mut self, schedule: DaySchedule) -> Self {
        self.config.schedule = schedule;
        self
    }

    /// Set the lunch window.
    pub fn with_lunch(mut self, lunch: LunchWindow) -> Self {
        self.config.lunch = lunch;
        self
    }

    /// Use `days` as the weekend, independent of the schedule.
    pub fn with_weekend(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.config.weekend = WeekendPolicy::Explicit(days.into_iter().collect());
        self
    }

    /// Treat every day without a schedule entry as a weekend day.
    pub fn weekend_from_schedule(mut self) -> Self {
        self.config.weekend = WeekendPolicy::DerivedFromSchedule;
        self
    }

    /// Set the weekend policy.
    pub fn with_weekend_policy(mut self, policy: WeekendPolicy) -> Self {
        self.config.weekend = policy;
        self
    }

    /// Replace the holiday list.
    pub fn with_holidays<H: Into<MonthDay>>(mut self, holidays: impl IntoIterator<Item = H>) -> Self {
        self.config.holidays = holidays.into_iter().map(Into::into).collect();
        self
    }

    /// Anchor holidays to `year` instead of the settings' reference year.
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.config.reference_year = Some(year);
        self
    }

    /// Set the validation level.
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.config.validation = validation;
        self
    }

    /// Set the boundary mode.
    pub fn with_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.config.boundary = boundary;
        self
    }

    /// Set the lunch rule.
    pub fn with_lunch_rule(mut self, rule: LunchRule) -> Self {
        self.config.lunch_rule = rule;
        self
    }

    /// Bound the interior days walked per call; `None` removes the bound.
    pub fn with_max_span_days(mut self, max: Option<u32>) -> Self {
        self.config.max_span_days = max;
        self
    }

    /// The configuration built so far.
    pub fn config(&self) -> &WorkingHoursConfig {
        &self.config
    }

    /// Build the calculator.
    pub fn build(self) -> Result<WorkingHoursCalculator> {
        WorkingHoursCalculator::new(self.config)
    }
}
