//! Wall-clock time at minute resolution.

use std::fmt;

use chrono::{NaiveTime, TimeDelta};

/// Hour and minute of a local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Converts fractional hours to an hour and minute by truncation.
    ///
    /// Input outside `[0, 24)` is wrapped into that range first.
    pub fn from_hours(hours: f64) -> Self {
        let wrapped = hours.rem_euclid(24.0);
        let total_minutes = ((wrapped * 60.0) as u32).min(24 * 60 - 1);
        Self {
            hour: (total_minutes / 60) as u8,
            minute: (total_minutes % 60) as u8,
        }
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns this time as a chrono [`NaiveTime`] with zero seconds.
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::MIN + TimeDelta::minutes(i64::from(self.hour) * 60 + i64::from(self.minute))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
