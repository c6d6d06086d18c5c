//! Sunrise and sunset from the almanac sunrise equation.
//!
//! Given a coordinate, a date and the local UTC offset, this crate computes
//! the local wall-clock times at which the sun crosses a zenith angle
//! (90°50′ by default: visual sunrise and sunset). Everything is a pure
//! function of its inputs.
//!
//! # Pipeline
//!
//! ```text
//!  ┌─────────────┐    ┌─────────────┐    ┌───────────────┐
//!  │ date → Doy  │───▶│ event_hours │───▶│ ClockTime →   │
//!  │ (calendar)  │    │ (equation)  │    │ NaiveDateTime │
//!  └─────────────┘    └─────────────┘    └───────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sidduril_solar::{GeoCoordinate, SolarConfig, format_event, sun_times};
//!
//! let arctic = GeoCoordinate::new(75.0, 15.0).unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
//! let times = sun_times(arctic, date, 1.0, &SolarConfig::new()).unwrap();
//!
//! assert_eq!(times.sunrise, None);
//! assert_eq!(format_event(times.sunset), "--:--");
//! ```

pub mod clock;
pub mod config;
pub mod coordinate;
pub mod equation;
pub mod error;
pub mod times;

pub use clock::ClockTime;
pub use config::{SolarConfig, Zenith};
pub use coordinate::GeoCoordinate;
pub use equation::{SolarEventKind, event_hours};
pub use error::SolarError;
pub use times::{NO_EVENT_PLACEHOLDER, SunTimes, format_event, sun_times};
