//! Sunrise and sunset for a calendar date.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use tracing::debug;

use sidduril_calendar::{Doy, is_gregorian_leap_year};

use crate::clock::ClockTime;
use crate::config::SolarConfig;
use crate::coordinate::GeoCoordinate;
use crate::equation::{SolarEventKind, event_hours};
use crate::error::SolarError;

/// Largest UTC offset in use anywhere, in hours.
const MAX_UTC_OFFSET: f64 = 14.0;

/// Text shown in place of an event that does not occur.
pub const NO_EVENT_PLACEHOLDER: &str = "--:--";

/// Sunrise and sunset on one date, as local wall-clock timestamps.
///
/// An event is `None` when the sun does not cross the horizon that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    /// The date both events are attached to.
    pub date: NaiveDate,
    /// Local sunrise, if any.
    pub sunrise: Option<NaiveDateTime>,
    /// Local sunset, if any.
    pub sunset: Option<NaiveDateTime>,
}

impl SunTimes {
    /// Returns the event of the given kind.
    pub fn event(&self, kind: SolarEventKind) -> Option<NaiveDateTime> {
        match kind {
            SolarEventKind::Sunrise => self.sunrise,
            SolarEventKind::Sunset => self.sunset,
        }
    }
}

/// Computes local sunrise and sunset for `date` at `coordinate`.
///
/// `utc_offset_hours` is the local offset from UTC on that date (for example
/// `3.0` for Israel summer time). Times are truncated to the minute and
/// attached to `date`; an event that would fall on a neighbouring day wraps
/// around midnight instead.
///
/// # Errors
///
/// Returns [`SolarError::InvalidUtcOffset`] for a non-finite offset or one
/// beyond ±14 hours, and [`SolarError::InvalidZenith`] for an invalid
/// configuration.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use sidduril_solar::{GeoCoordinate, SolarConfig, sun_times};
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
/// let times = sun_times(GeoCoordinate::DEFAULT, date, 3.0, &SolarConfig::new()).unwrap();
/// assert!(times.sunrise.unwrap() < times.sunset.unwrap());
/// ```
pub fn sun_times(
    coordinate: GeoCoordinate,
    date: NaiveDate,
    utc_offset_hours: f64,
    config: &SolarConfig,
) -> Result<SunTimes, SolarError> {
    config.validate()?;
    if !utc_offset_hours.is_finite() || utc_offset_hours.abs() > MAX_UTC_OFFSET {
        return Err(SolarError::InvalidUtcOffset {
            hours: utc_offset_hours,
        });
    }
    let doy = Doy::new(date.ordinal() as u16, is_gregorian_leap_year(date.year()))?;

    let at = |kind| {
        event_hours(coordinate, doy, utc_offset_hours, kind, config.zenith())
            .map(|hours| date.and_time(ClockTime::from_hours(hours).to_naive_time()))
    };
    let times = SunTimes {
        date,
        sunrise: at(SolarEventKind::Sunrise),
        sunset: at(SolarEventKind::Sunset),
    };

    debug!(
        latitude = coordinate.latitude(),
        longitude = coordinate.longitude(),
        doy = doy.get(),
        utc_offset_hours,
        sunrise = %format_event(times.sunrise),
        sunset = %format_event(times.sunset),
        "computed sun times"
    );
    Ok(times)
}

/// Renders an event as `HH:MM`, or [`NO_EVENT_PLACEHOLDER`] when absent.
pub fn format_event(event: Option<NaiveDateTime>) -> String {
    match event {
        Some(instant) => instant.format("%H:%M").to_string(),
        None => NO_EVENT_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;
    use crate::config::Zenith;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn events_attach_to_input_date() {
        let d = date(2024, 6, 20);
        let times = sun_times(GeoCoordinate::DEFAULT, d, 3.0, &SolarConfig::new()).unwrap();
        assert_eq!(times.date, d);
        assert_eq!(times.sunrise.unwrap().date(), d);
        assert_eq!(times.sunset.unwrap().date(), d);
        assert_eq!(times.sunrise.unwrap().second(), 0);
        assert_eq!(times.event(SolarEventKind::Sunset), times.sunset);
    }

    #[test]
    fn invalid_offsets_rejected() {
        let d = date(2024, 6, 20);
        for hours in [14.5, -15.0, f64::NAN] {
            let err = sun_times(GeoCoordinate::DEFAULT, d, hours, &SolarConfig::new()).unwrap_err();
            assert!(matches!(err, SolarError::InvalidUtcOffset { .. }));
        }
    }

    #[test]
    fn invalid_zenith_rejected() {
        let cfg = SolarConfig::new().with_zenith(Zenith::Custom(200.0));
        let err = sun_times(GeoCoordinate::DEFAULT, date(2024, 1, 1), 2.0, &cfg).unwrap_err();
        assert_eq!(err, SolarError::InvalidZenith { degrees: 200.0 });
    }

    #[test]
    fn leap_day_is_accepted() {
        let times = sun_times(GeoCoordinate::DEFAULT, date(2024, 12, 31), 2.0, &SolarConfig::new());
        assert!(times.is_ok());
    }

    #[test]
    fn format_placeholder() {
        assert_eq!(format_event(None), "--:--");
        let instant = date(2024, 6, 20).and_hms_opt(5, 3, 0).unwrap();
        assert_eq!(format_event(Some(instant)), "05:03");
    }
}
