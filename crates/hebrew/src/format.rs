//! Full Hebrew date strings: `"<day> <month> <year>"`.

use tracing::trace;

use crate::error::HebrewError;
use crate::month::month_name;
use crate::numeral::numeral_of;

/// Highest day number any Hebrew month reaches.
const MAX_DAY: u8 = 30;

/// Formats a Hebrew calendar date as `"<day-numeral> <month-name> <year-numeral>"`.
///
/// The leap flag comes from the caller's calendar; this function does not
/// derive it from the year. A day outside 1..=30 or a month outside the
/// year's month list renders as an empty token.
///
/// # Errors
///
/// Returns [`HebrewError::InvalidYear`] if `year <= 0`.
///
/// # Example
///
/// ```
/// use sidduril_hebrew::format_hebrew_date;
///
/// let text = format_hebrew_date(7, 2, 5787, true).unwrap();
/// assert_eq!(text, "ז׳ חשון תשפ״ז");
/// ```
pub fn format_hebrew_date(
    day: u8,
    month: u8,
    year: i32,
    is_leap_year: bool,
) -> Result<String, HebrewError> {
    if year <= 0 {
        return Err(HebrewError::InvalidYear { year });
    }
    let day_token = if (1..=MAX_DAY).contains(&day) {
        numeral_of(u32::from(day))
    } else {
        String::new()
    };
    let year_token = numeral_of(year.unsigned_abs());
    let text = format!("{day_token} {} {year_token}", month_name(month, is_leap_year));
    trace!(day, month, year, is_leap_year, %text, "formatted hebrew date");
    Ok(text)
}
