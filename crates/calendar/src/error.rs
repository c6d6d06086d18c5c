//! Error types for the sidduril-calendar crate.

/// Error type for all fallible operations in the sidduril-calendar crate.
///
/// Covers validation failures for day-of-year values, years, month numbers,
/// and day-within-month values in both the Gregorian and Hebrew calendars.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a day-of-year value is outside `1..=max_doy`.
    #[error("invalid day of year: {doy} (must be 1..={max_doy})")]
    InvalidDoy {
        /// The invalid day-of-year value that was provided.
        doy: u16,
        /// Length of the year in question (365 or 366).
        max_doy: u16,
    },

    /// Returned when a year is not representable (zero or negative).
    #[error("invalid year: {year} (must be >= 1)")]
    InvalidYear {
        /// The invalid year that was provided.
        year: i32,
    },

    /// Returned when a month number is outside `1..=max_month`.
    #[error("invalid month: {month} (must be 1..={max_month})")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
        /// Number of months in the year in question.
        max_month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },
}
