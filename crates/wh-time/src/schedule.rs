//! `DaySchedule`: the working window of each weekday.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::weekday::Weekday;
use crate::window::WorkWindow;

/// Map from weekday to its working window.
///
/// Serialized as a map keyed by weekday name:
///
/// ```json
/// { "Monday": { "start": 9.0, "end": 18.0 }, "Friday": { "start": 9.0, "end": 13.0 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaySchedule {
    windows: BTreeMap<Weekday, WorkWindow>,
}

impl DaySchedule {
    /// An empty schedule (no working days).
    pub fn new() -> Self {
        Self {
            windows: BTreeMap::new(),
        }
    }

    /// The same `window` on each of `days`.
    pub fn uniform(days: impl IntoIterator<Item = Weekday>, window: WorkWindow) -> Self {
        days.into_iter().map(|d| (d, window)).collect()
    }

    /// Set the window for `day`, replacing any previous one.
    pub fn with(mut self, day: Weekday, window: WorkWindow) -> Self {
        self.insert(day, window);
        self
    }

    /// Set the window for `day`, returning the previous one.
    pub fn insert(&mut self, day: Weekday, window: WorkWindow) -> Option<WorkWindow> {
        self.windows.insert(day, window)
    }

    /// Return the window for `day`, if configured.
    pub fn get(&self, day: Weekday) -> Option<WorkWindow> {
        self.windows.get(&day).copied()
    }

    /// Return `true` if `day` has a window.
    pub fn contains(&self, day: Weekday) -> bool {
        self.windows.contains_key(&day)
    }

    /// Number of configured days.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Return `true` if no day is configured.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Iterate over `(day, window)` pairs, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, WorkWindow)> + '_ {
        self.windows.iter().map(|(d, w)| (*d, *w))
    }

    /// Iterate over the configured days, Monday first.
    pub fn working_days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.windows.keys().copied()
    }
}

impl Default for DaySchedule {
    /// Monday to Friday, 09:00–18:00.
    fn default() -> Self {
        Self::uniform(
            [
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday,
            ],
            WorkWindow::new(9.0, 18.0),
        )
    }
}

impl FromIterator<(Weekday, WorkWindow)> for DaySchedule {
    fn from_iter<I: IntoIterator<Item = (Weekday, WorkWindow)>>(iter: I) -> Self {
        Self {
            windows: iter.into_iter().collect(),
        }
    }
}
