//! Fixed-day arithmetic for the proleptic Gregorian calendar.
//!
//! A fixed day is a running day count where day 1 is Gregorian 0001-01-01.

use crate::doy::Doy;
use crate::error::CalendarError;

/// Returns the fixed day number of a Gregorian date.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] for years before 1 and propagates
/// month/day validation errors from [`Doy::from_ymd`].
pub fn fixed_from_gregorian(year: i32, month: u8, day: u8) -> Result<i64, CalendarError> {
    if year < 1 {
        return Err(CalendarError::InvalidYear { year });
    }
    let doy = Doy::from_ymd(year, month, day)?;
    let prior = i64::from(year) - 1;
    Ok(365 * prior + prior / 4 - prior / 100 + prior / 400 + i64::from(doy.get()))
}

/// Returns the weekday of a fixed day, counted from Sunday (0) to Saturday (6).
pub fn weekday_from_fixed(fixed: i64) -> u8 {
    // Fixed day 1 was a Monday.
    fixed.rem_euclid(7) as u8
}
