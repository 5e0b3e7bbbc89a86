//! `Weekday`: day-of-week enum used as schedule key.

use serde::{Deserialize, Serialize};

/// Day of the week.
///
/// Variants are numbered 0–6 (Monday = 0, Sunday = 6), the same numbering
/// as `chrono::Weekday::num_days_from_monday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (0).
    Monday = 0,
    /// Tuesday (1).
    Tuesday = 1,
    /// Wednesday (2).
    Wednesday = 2,
    /// Thursday (3).
    Thursday = 3,
    /// Friday (4).
    Friday = 4,
    /// Saturday (5).
    Saturday = 5,
    /// Sunday (6).
    Sunday = 6,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Construct from the index (0 = Monday … 6 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_index(n: u8) -> Option<Self> {
        Self::ALL.get(n as usize).copied()
    }

    /// Return the index (0 = Monday … 6 = Sunday).
    pub fn index(&self) -> u8 {
        *self as u8
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn index_roundtrip() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_index(day.index()), Some(day));
        }
        assert_eq!(Weekday::from_index(7), None);
    }

    #[test]
    fn from_chrono() {
        // 2013-01-23 is a Wednesday
        let d = NaiveDate::from_ymd_opt(2013, 1, 23).unwrap();
        assert_eq!(Weekday::from(d.weekday()), Weekday::Wednesday);
        assert_eq!(
            Weekday::from(d.weekday()).index() as u32,
            d.weekday().num_days_from_monday()
        );
    }
}
