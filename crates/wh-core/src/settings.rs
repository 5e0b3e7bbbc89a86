//! Global library settings.
//!
//! [`Settings`] holds the **reference date**: the "today" used when a
//! calculator is built without an explicit reference year.  It is a
//! process-wide singleton accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the override is stored behind a `Mutex` so that it can be
//! changed from any thread.  Code that changes it should restore it when done,
//! most easily through [`ScopedReferenceDate`].

use std::sync::{Mutex, OnceLock};

use chrono::{Datelike, Local, NaiveDate};

/// Process-wide settings used by the workinghours library.
pub struct Settings {
    /// Overrides the wall-clock date when set.
    reference_date: Mutex<Option<NaiveDate>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            reference_date: Mutex::new(None),
        })
    }

    /// Return the override date, or today's local date if none is set.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date_override()
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Year of [`reference_date`](Self::reference_date).
    pub fn reference_year(&self) -> i32 {
        self.reference_date().year()
    }

    /// Return the override date, if any.
    pub fn reference_date_override(&self) -> Option<NaiveDate> {
        *self
            .reference_date
            .lock()
            .expect("Settings mutex poisoned")
    }

    /// Pin the reference date.
    pub fn set_reference_date(&self, date: NaiveDate) {
        *self
            .reference_date
            .lock()
            .expect("Settings mutex poisoned") = Some(date);
    }

    /// Clear the override, resetting it to "use today".
    pub fn reset_reference_date(&self) {
        *self
            .reference_date
            .lock()
            .expect("Settings mutex poisoned") = None;
    }
}

/// Pins the reference date for its lifetime and restores the previous
/// override on drop.
#[must_use = "the override is reverted as soon as the guard is dropped"]
pub struct ScopedReferenceDate {
    previous: Option<NaiveDate>,
}

impl ScopedReferenceDate {
    /// Pin the global reference date to `date`.
    pub fn new(date: NaiveDate) -> Self {
        let settings = Settings::instance();
        let previous = settings.reference_date_override();
        settings.set_reference_date(date);
        Self { previous }
    }
}

impl Drop for ScopedReferenceDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(date) => settings.set_reference_date(date),
            None => settings.reset_reference_date(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test in this crate that touches the singleton.
    #[test]
    fn scoped_override_is_restored() {
        let pinned = NaiveDate::from_ymd_opt(2013, 1, 23).unwrap();
        let before = Settings::instance().reference_date_override();
        {
            let _guard = ScopedReferenceDate::new(pinned);
            assert_eq!(Settings::instance().reference_date(), pinned);
            assert_eq!(Settings::instance().reference_year(), 2013);
        }
        assert_eq!(Settings::instance().reference_date_override(), before);
    }
}
