//! Hebrew numerals and date strings for display.
//!
//! This crate renders Hebrew calendar values as text. It never decides
//! calendar facts itself: whether a year is a leap year is passed in by the
//! caller (see `sidduril-calendar`).
//!
//! # Pipeline
//!
//! ```text
//!  (day, month, year, leap) ──▶ numeral_of(day)  ─┐
//!                           ──▶ month_name(...)  ─┼──▶ "ז׳ חשון תשפ״ז"
//!                           ──▶ numeral_of(year) ─┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use sidduril_hebrew::{format_hebrew_date, month_name, numeral_of};
//!
//! assert_eq!(numeral_of(180), "ק״פ");
//! assert_eq!(month_name(6, true), "אדר א׳");
//! assert_eq!(format_hebrew_date(1, 1, 5785, false).unwrap(), "א׳ תשרי תשפ״ה");
//! ```

pub mod error;
pub mod format;
pub mod month;
pub mod numeral;

pub use error::HebrewError;
pub use format::format_hebrew_date;
pub use month::{month_name, month_names, months_in_year, weekday_name};
pub use numeral::numeral_of;

/// Hebrew punctuation mark for a single-letter numeral (U+05F3).
pub const GERESH: char = '\u{05F3}';

/// Hebrew punctuation mark placed before the last letter of a multi-letter
/// numeral (U+05F4).
pub const GERSHAYIM: char = '\u{05F4}';
