//! Hebrew month and weekday names.

/// Month names of a common (12-month) year, from Tishrei.
const COMMON_YEAR_MONTHS: [&str; 12] = [
    "תשרי", "חשון", "כסלו", "טבת", "שבט", "אדר", "ניסן", "אייר", "סיון", "תמוז", "אב", "אלול",
];

/// Month names of a leap (13-month) year, from Tishrei.
const LEAP_YEAR_MONTHS: [&str; 13] = [
    "תשרי", "חשון", "כסלו", "טבת", "שבט", "אדר א׳", "אדר ב׳", "ניסן", "אייר", "סיון", "תמוז", "אב",
    "אלול",
];

/// Weekday names, Sunday first.
const WEEKDAYS: [&str; 7] = [
    "יום ראשון",
    "יום שני",
    "יום שלישי",
    "יום רביעי",
    "יום חמישי",
    "יום שישי",
    "יום שבת",
];

/// Returns the month list for a common or leap year.
pub fn month_names(is_leap_year: bool) -> &'static [&'static str] {
    if is_leap_year {
        &LEAP_YEAR_MONTHS
    } else {
        &COMMON_YEAR_MONTHS
    }
}

/// Returns 13 for leap years and 12 otherwise.
pub fn months_in_year(is_leap_year: bool) -> u8 {
    month_names(is_leap_year).len() as u8
}

/// Returns the name of `month` (1-based, Tishrei first).
///
/// In a leap year month 6 is Adar I and month 7 is Adar II; otherwise month 6
/// is Adar and month 7 is Nisan. Months outside the list yield `""`.
pub fn month_name(month: u8, is_leap_year: bool) -> &'static str {
    usize::from(month)
        .checked_sub(1)
        .and_then(|index| month_names(is_leap_year).get(index))
        .copied()
        .unwrap_or("")
}

/// Returns the weekday name for a day counted from Sunday (0) to
/// Saturday (6), or `""` when out of range.
pub fn weekday_name(days_from_sunday: u8) -> &'static str {
    WEEKDAYS.get(usize::from(days_from_sunday)).copied().unwrap_or("")
}
