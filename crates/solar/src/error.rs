//! Error types for the sidduril-solar crate.

use sidduril_calendar::CalendarError;

/// Error type for all fallible operations in the sidduril-solar crate.
///
/// A sun that does not rise or set is not an error: it is reported as an
/// absent event in [`crate::SunTimes`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolarError {
    /// Returned when latitude is outside [-90, 90] or longitude outside
    /// [-180, 180], or either is not finite.
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate {
        /// The latitude that was provided, in degrees.
        latitude: f64,
        /// The longitude that was provided, in degrees.
        longitude: f64,
    },

    /// Returned when the UTC offset is not finite or exceeds ±14 hours.
    #[error("invalid UTC offset: {hours} hours (must be within -14..=14)")]
    InvalidUtcOffset {
        /// The offset that was provided, in hours.
        hours: f64,
    },

    /// Returned when a custom zenith is not finite or outside (0, 180) degrees.
    #[error("invalid zenith: {degrees} degrees (must be in (0, 180))")]
    InvalidZenith {
        /// The zenith that was provided, in degrees.
        degrees: f64,
    },

    /// Returned when the calendar date cannot be reduced to a day of year.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_coordinate() {
        let err = SolarError::InvalidCoordinate {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert_eq!(err.to_string(), "invalid coordinate: latitude 91, longitude 0");
    }

    #[test]
    fn error_invalid_offset() {
        let err = SolarError::InvalidUtcOffset { hours: 15.5 };
        assert_eq!(
            err.to_string(),
            "invalid UTC offset: 15.5 hours (must be within -14..=14)"
        );
    }

    #[test]
    fn calendar_errors_are_transparent() {
        let err = SolarError::from(CalendarError::InvalidYear { year: 0 });
        assert_eq!(err.to_string(), "invalid year: 0 (must be >= 1)");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<SolarError>();
    }
}
