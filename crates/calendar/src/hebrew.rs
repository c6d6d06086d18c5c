//! Year structure of the arithmetic Hebrew calendar.
//!
//! Months are numbered from Tishrei (1) in calendar order. In a leap year
//! month 6 is Adar I and month 7 is Adar II; in a common year month 6 is Adar
//! and Nisan follows as month 7.

/// Fixed day of 1 Tishrei AM 1 (proleptic Julian 7 October 3761 BCE).
pub(crate) const HEBREW_EPOCH: i64 = -1_373_427;

/// Length of a lunation in parts (1 hour = 1080 parts).
const PARTS_PER_MONTH: i64 = 13_753;

/// Parts in a day.
const PARTS_PER_DAY: i64 = 25_920;

/// Molad of Tishrei AM 1 in parts after the epoch's start of day.
const MOLAD_BAHARAD: i64 = 12_084;

/// Returns `true` if `year` carries the intercalary month (Adar I).
///
/// Years 3, 6, 8, 11, 14, 17 and 19 of each 19-year cycle are leap years.
pub fn is_hebrew_leap_year(year: i32) -> bool {
    (7 * i64::from(year) + 1).rem_euclid(19) < 7
}

/// Returns 13 for leap years and 12 otherwise.
pub fn months_in_hebrew_year(year: i32) -> u8 {
    if is_hebrew_leap_year(year) { 13 } else { 12 }
}

/// Days from the epoch to the molad-derived start of `year`, including the
/// postponement that keeps Rosh Hashanah off Sunday, Wednesday and Friday.
fn elapsed_days(year: i64) -> i64 {
    let months = (235 * year - 234).div_euclid(19);
    let parts = MOLAD_BAHARAD + PARTS_PER_MONTH * months;
    let days = 29 * months + parts.div_euclid(PARTS_PER_DAY);
    if (3 * (days + 1)).rem_euclid(7) < 3 {
        days + 1
    } else {
        days
    }
}

/// Extra delay that keeps year lengths within the permitted set.
fn year_length_delay(year: i64) -> i64 {
    let previous = elapsed_days(year - 1);
    let current = elapsed_days(year);
    let next = elapsed_days(year + 1);
    if next - current == 356 {
        2
    } else if current - previous == 382 {
        1
    } else {
        0
    }
}

/// Returns the fixed day of 1 Tishrei of `year`.
pub(crate) fn new_year_fixed(year: i32) -> i64 {
    let year = i64::from(year);
    HEBREW_EPOCH + elapsed_days(year) + year_length_delay(year)
}

/// Returns the number of days in `year`: 353–355 in common years, 383–385 in
/// leap years.
pub fn days_in_hebrew_year(year: i32) -> u16 {
    (new_year_fixed(year + 1) - new_year_fixed(year)) as u16
}

/// Returns the number of days in `month` of `year`, or `None` when the month
/// does not exist in that year.
pub fn days_in_hebrew_month(year: i32, month: u8) -> Option<u8> {
    let leap = is_hebrew_leap_year(year);
    if month == 0 || month > months_in_hebrew_year(year) {
        return None;
    }
    let year_length = days_in_hebrew_year(year);
    // Months after the Adar block keep their common-year parity.
    let shifted = if leap && month > 6 { month - 1 } else { month };
    let days = match (month, shifted) {
        (2, _) if year_length % 10 == 5 => 30,
        (2, _) => 29,
        (3, _) if year_length % 10 == 3 => 29,
        (3, _) => 30,
        (6, _) if leap => 30,
        (_, s) if s % 2 == 1 => 30,
        _ => 29,
    };
    Some(days)
}
