//! # sidduril-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian and Hebrew calendars.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"Doy::from_ymd()"| B["Doy (1..=366)"]
//!     A -->|"fixed_from_gregorian()"| C["fixed day"]
//!     C -->|"weekday_from_fixed()"| D["weekday 0..=6"]
//!     A -->|"HebrewDate::from_gregorian()"| E["HebrewDate"]
//!     E -->|".is_leap_year()"| F["leap flag"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use sidduril_calendar::{Doy, HebrewDate, is_hebrew_leap_year};
//!
//! // Day-of-year conversions
//! let doy = Doy::from_ymd(2024, 6, 20).unwrap();
//! assert_eq!(doy.get(), 172);
//!
//! // Gregorian to Hebrew
//! let date = HebrewDate::from_gregorian(2024, 10, 3).unwrap();
//! assert_eq!((date.day(), date.month(), date.year()), (1, 1, 5785));
//! assert!(!is_hebrew_leap_year(5785));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `doy` | Day-of-year newtype and Gregorian month tables |
//! | `gregorian` | Fixed-day numbering and weekdays |
//! | `hebrew` | Hebrew year structure: leap years, year and month lengths |
//! | `date` | Validated Hebrew date and Gregorian conversion |
//! | `error` | Error types |

mod date;
mod doy;
mod error;
mod gregorian;
mod hebrew;

pub use date::HebrewDate;
pub use doy::{Doy, days_in_gregorian_month, is_gregorian_leap_year};
pub use error::CalendarError;
pub use gregorian::{fixed_from_gregorian, weekday_from_fixed};
pub use hebrew::{
    days_in_hebrew_month, days_in_hebrew_year, is_hebrew_leap_year, months_in_hebrew_year,
};
