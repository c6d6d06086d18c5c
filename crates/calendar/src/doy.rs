//! Day-of-year newtype and month tables for the proleptic Gregorian calendar.

use crate::error::CalendarError;

/// Day-of-year in the Gregorian calendar (1..=365, or 1..=366 in leap years).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

/// Number of days in each month of a common year (index 0 unused).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month starts in a common year (index 0 unused).
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in a Gregorian month, or `None` for a month
/// outside 1..=12.
pub fn days_in_gregorian_month(year: i32, month: u8) -> Option<u8> {
    match month {
        2 if is_gregorian_leap_year(year) => Some(29),
        1..=12 => Some(DAYS_PER_MONTH[month as usize]),
        _ => None,
    }
}

impl Doy {
    /// Creates a new `Doy`, given whether the surrounding year is a leap year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `doy` is not in 1..=365
    /// (1..=366 when `leap` is set).
    pub fn new(doy: u16, leap: bool) -> Result<Self, CalendarError> {
        let max_doy = if leap { 366 } else { 365 };
        if !(1..=max_doy).contains(&doy) {
            return Err(CalendarError::InvalidDoy { doy, max_doy });
        }
        Ok(Self(doy))
    }

    /// Creates a new `Doy` from a Gregorian `(year, month, day)`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` is not valid for the month.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_gregorian_month(year, month).ok_or(CalendarError::InvalidMonth {
            month,
            max_month: 12,
        })?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        let leap_shift = u16::from(month > 2 && is_gregorian_leap_year(year));
        Ok(Self(MONTH_START_DOY[month as usize] + leap_shift + day as u16 - 1))
    }

    /// Returns the inner day-of-year value.
    pub fn get(self) -> u16 {
        self.0
    }
}
