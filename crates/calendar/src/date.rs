//! Hebrew calendar date with Gregorian conversion.

use crate::error::CalendarError;
use crate::gregorian::fixed_from_gregorian;
use crate::hebrew::{
    HEBREW_EPOCH, days_in_hebrew_month, is_hebrew_leap_year, months_in_hebrew_year,
    new_year_fixed,
};

/// 98496 Hebrew years last 35975351 days on average; the ratio gives the mean
/// year length used to estimate the year of a fixed day.
const YEARS_PER_CYCLE_UNIT: i64 = 98_496;
const DAYS_PER_CYCLE_UNIT: i64 = 35_975_351;

/// A validated date in the Hebrew calendar, months numbered from Tishrei.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HebrewDate {
    year: i32,
    month: u8,
    day: u8,
}

impl HebrewDate {
    /// Creates a new `HebrewDate`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if `year < 1`,
    /// [`CalendarError::InvalidMonth`] if the month does not exist in that
    /// year, and [`CalendarError::InvalidDay`] if the day exceeds the month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if year < 1 {
            return Err(CalendarError::InvalidYear { year });
        }
        let max_day = days_in_hebrew_month(year, month).ok_or(CalendarError::InvalidMonth {
            month,
            max_month: months_in_hebrew_year(year),
        })?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Converts a Gregorian `(year, month, day)` into the Hebrew calendar.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`] if the Gregorian date is invalid.
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let fixed = fixed_from_gregorian(year, month, day)?;
        Ok(Self::from_fixed(fixed))
    }

    /// Converts a fixed day number into the Hebrew calendar.
    ///
    /// Fixed days before 1 Tishrei AM 1 are clamped to AM 1.
    pub(crate) fn from_fixed(fixed: i64) -> Self {
        let estimate =
            ((fixed - HEBREW_EPOCH) * YEARS_PER_CYCLE_UNIT).div_euclid(DAYS_PER_CYCLE_UNIT) + 1;
        let mut year = i32::try_from(estimate.max(1)).unwrap_or(i32::MAX - 1);
        while year > 1 && new_year_fixed(year) > fixed {
            year -= 1;
        }
        while new_year_fixed(year + 1) <= fixed {
            year += 1;
        }

        let mut remaining = (fixed - new_year_fixed(year)).max(0);
        let mut month = 1;
        while let Some(days) = days_in_hebrew_month(year, month) {
            if remaining < i64::from(days) {
                break;
            }
            remaining -= i64::from(days);
            month += 1;
        }
        Self {
            year,
            month,
            day: remaining as u8 + 1,
        }
    }

    /// Returns the year (Anno Mundi).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month, counted from Tishrei.
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `true` if this date falls in a leap year (13 months).
    pub fn is_leap_year(self) -> bool {
        is_hebrew_leap_year(self.year)
    }
}
