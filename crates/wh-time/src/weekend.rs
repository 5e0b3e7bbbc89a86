//! Weekend days and how they are chosen.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::schedule::DaySchedule;
use crate::weekday::Weekday;

/// Set of weekdays on which no work is counted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekendSet {
    days: BTreeSet<Weekday>,
}

impl WeekendSet {
    /// An empty weekend: every day is a potential working day.
    pub fn none() -> Self {
        Self {
            days: BTreeSet::new(),
        }
    }

    /// Every weekday that has no window in `schedule`.
    pub fn complement_of(schedule: &DaySchedule) -> Self {
        Weekday::ALL
            .into_iter()
            .filter(|d| !schedule.contains(*d))
            .collect()
    }

    /// Return `true` if `day` is a weekend day.
    pub fn contains(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Number of weekend days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Return `true` if there is no weekend day.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterate over the weekend days, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.days.iter().copied()
    }

    /// The weekend days as a vector, Monday first.
    pub fn to_vec(&self) -> Vec<Weekday> {
        self.iter().collect()
    }
}

impl Default for WeekendSet {
    /// Saturday and Sunday.
    fn default() -> Self {
        [Weekday::Saturday, Weekday::Sunday].into_iter().collect()
    }
}

impl FromIterator<Weekday> for WeekendSet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

/// Where the weekend comes from.
///
/// ```
/// use wh_time::{DaySchedule, Weekday, WeekendPolicy, WorkWindow};
///
/// let schedule = DaySchedule::uniform(
///     [Weekday::Monday, Weekday::Wednesday, Weekday::Friday],
///     WorkWindow::new(9.0, 17.0),
/// );
/// let weekend = WeekendPolicy::DerivedFromSchedule.resolve(&schedule);
/// assert_eq!(
///     weekend.to_vec(),
///     vec![Weekday::Tuesday, Weekday::Thursday, Weekday::Saturday, Weekday::Sunday],
/// );
///
/// // The default is an explicit Saturday/Sunday weekend, whatever the schedule.
/// let weekend = WeekendPolicy::default().resolve(&schedule);
/// assert_eq!(weekend.to_vec(), vec![Weekday::Saturday, Weekday::Sunday]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekendPolicy {
    /// Every weekday without a schedule entry is a weekend day.
    DerivedFromSchedule,
    /// The given days, independent of the schedule.
    Explicit(WeekendSet),
}

impl WeekendPolicy {
    /// Compute the weekend for `schedule`.
    pub fn resolve(&self, schedule: &DaySchedule) -> WeekendSet {
        match self {
            WeekendPolicy::DerivedFromSchedule => WeekendSet::complement_of(schedule),
            WeekendPolicy::Explicit(days) => days.clone(),
        }
    }
}

impl Default for WeekendPolicy {
    fn default() -> Self {
        WeekendPolicy::Explicit(WeekendSet::default())
    }
}
