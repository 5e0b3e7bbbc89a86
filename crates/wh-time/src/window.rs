//! Working and lunch windows expressed in fractional hours.
//!
//! A time of day is turned into hours as `hour + round(minute / 60, 2)`, so
//! sub-hour precision is capped at two decimals of an hour and seconds are
//! ignored.

use chrono::Timelike;
use serde::{Deserialize, Serialize};
use wh_core::Hours;

/// Convert the time-of-day part of `t` to fractional hours.
///
/// ```
/// use chrono::NaiveTime;
/// use wh_time::window::fractional_hour;
///
/// let t = NaiveTime::from_hms_opt(9, 10, 59).unwrap();
/// assert!((fractional_hour(&t) - 9.17).abs() < 1e-12);
/// ```
pub fn fractional_hour<T: Timelike>(t: &T) -> Hours {
    let minutes = (f64::from(t.minute()) / 60.0 * 100.0).round() / 100.0;
    f64::from(t.hour()) + minutes
}

fn bounds_are_valid(start: Hours, end: Hours) -> bool {
    start.is_finite() && end.is_finite() && (0.0..=24.0).contains(&start) && end <= 24.0 && start < end
}

/// How a lunch break that only partly overlaps a window is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LunchRule {
    /// When a window bound falls strictly inside lunch, the whole window is
    /// counted and no lunch is subtracted.  When lunch lies inside the
    /// window, its full duration is subtracted.
    #[default]
    Legacy,
    /// Subtract exactly the part of lunch that intersects the window.
    Exact,
}

/// A `[start, end)` span of one day during which work is counted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkWindow {
    /// Opening hour.
    pub start: Hours,
    /// Closing hour.
    pub end: Hours,
}

impl WorkWindow {
    /// Create a window from `start` to `end`; no validation is performed.
    pub const fn new(start: Hours, end: Hours) -> Self {
        Self { start, end }
    }

    /// Length of the window, ignoring lunch.  Negative if inverted.
    pub fn span(&self) -> Hours {
        self.end - self.start
    }

    /// `true` if both bounds lie in `[0, 24]` and `start < end`.
    pub fn is_valid(&self) -> bool {
        bounds_are_valid(self.start, self.end)
    }

    /// Clamp `hour` into `[start, end]`.
    pub fn clamp(&self, hour: Hours) -> Hours {
        hour.max(self.start).min(self.end)
    }

    /// Hours worked in this window once `lunch` is taken out.
    ///
    /// With [`LunchRule::Legacy`]:
    ///
    /// ```
    /// use wh_time::window::{LunchRule, LunchWindow, WorkWindow};
    ///
    /// let lunch = LunchWindow::new(13.0, 14.0);
    /// let hours = |s, e| WorkWindow::new(s, e).working_hours(&lunch, LunchRule::Legacy);
    ///
    /// assert_eq!(hours(9.5, 16.0), 5.5);  // lunch fully inside
    /// assert_eq!(hours(14.0, 17.0), 3.0); // after lunch
    /// assert_eq!(hours(13.5, 17.0), 3.5); // starts during lunch
    /// ```
    pub fn working_hours(&self, lunch: &LunchWindow, rule: LunchRule) -> Hours {
        let (ws, we) = (self.start, self.end);
        let (ls, le) = (lunch.start, lunch.end);

        if we <= ls || ws >= le {
            return we - ws;
        }

        match rule {
            LunchRule::Legacy => {
                let during_lunch = |h: Hours| h > ls && h < le;
                if during_lunch(ws) || during_lunch(we) {
                    we - ws
                } else {
                    (ls - ws) + (we - le)
                }
            }
            LunchRule::Exact => {
                let overlap = (we.min(le) - ws.max(ls)).max(0.0);
                (we - ws) - overlap
            }
        }
    }
}

/// The daily break, shared by every working day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunchWindow {
    /// Start of the break.
    pub start: Hours,
    /// End of the break.
    pub end: Hours,
}

impl LunchWindow {
    /// Create a lunch window; no validation is performed.
    pub const fn new(start: Hours, end: Hours) -> Self {
        Self { start, end }
    }

    /// Length of the break.
    pub fn duration(&self) -> Hours {
        self.end - self.start
    }

    /// `true` if both bounds lie in `[0, 24]` and `start < end`.
    pub fn is_valid(&self) -> bool {
        bounds_are_valid(self.start, self.end)
    }
}

impl Default for LunchWindow {
    /// 13:00–14:00.
    fn default() -> Self {
        Self::new(13.0, 14.0)
    }
}
