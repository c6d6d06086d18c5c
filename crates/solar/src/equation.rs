//! Almanac sunrise equation.
//!
//! Low-precision solar position from the day of year alone: mean anomaly,
//! true longitude, right ascension and declination, then the local hour
//! angle at which the sun reaches the requested zenith. Accurate to a few
//! minutes between the polar circles.

use std::f64::consts::{FRAC_PI_2, TAU};

use sidduril_calendar::Doy;

use crate::config::Zenith;
use crate::coordinate::GeoCoordinate;

/// Which horizon crossing to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEventKind {
    /// Morning crossing.
    Sunrise,
    /// Evening crossing.
    Sunset,
}

/// Mean anomaly at day zero, degrees.
const MEAN_ANOMALY_OFFSET: f64 = 3.289;
/// Mean anomaly rate, degrees per day.
const MEAN_ANOMALY_RATE: f64 = 0.9856;
/// Longitude of perihelion plus 180°, degrees.
const PERIHELION: f64 = 282.634;
/// cos of the obliquity of the ecliptic.
const COS_OBLIQUITY: f64 = 0.91764;
/// sin of the obliquity of the ecliptic.
const SIN_OBLIQUITY: f64 = 0.39782;
/// Sidereal drift of local mean time, hours per day.
const SIDEREAL_DRIFT: f64 = 0.06571;
/// Local mean time offset, hours.
const LOCAL_MEAN_TIME_OFFSET: f64 = 6.622;

/// Computes the local wall-clock time of a sunrise or sunset as fractional
/// hours in `[0, 24)`.
///
/// Returns `None` when the sun stays above or below the zenith all day at
/// this latitude (polar day or night). The result wraps around midnight
/// without moving to the neighbouring date.
pub fn event_hours(
    coordinate: GeoCoordinate,
    doy: Doy,
    utc_offset_hours: f64,
    kind: SolarEventKind,
    zenith: Zenith,
) -> Option<f64> {
    let n = f64::from(doy.get());
    let latitude = coordinate.latitude().to_radians();

    let mean_anomaly = (MEAN_ANOMALY_RATE * n - MEAN_ANOMALY_OFFSET).to_radians();
    let true_longitude = (mean_anomaly
        + 1.916_f64.to_radians() * mean_anomaly.sin()
        + 0.020_f64.to_radians() * (2.0 * mean_anomaly).sin()
        + PERIHELION.to_radians())
    .rem_euclid(TAU);

    let mut right_ascension = (COS_OBLIQUITY * true_longitude.tan()).atan().rem_euclid(TAU);
    // Put right ascension in the same quadrant as the true longitude.
    let longitude_quadrant = (true_longitude / FRAC_PI_2).floor() * FRAC_PI_2;
    let ascension_quadrant = (right_ascension / FRAC_PI_2).floor() * FRAC_PI_2;
    right_ascension += longitude_quadrant - ascension_quadrant;
    let right_ascension_hours = right_ascension.to_degrees() / 15.0;

    let sin_declination = SIN_OBLIQUITY * true_longitude.sin();
    let cos_declination = sin_declination.asin().cos();

    let cos_hour_angle = (zenith.degrees().to_radians().cos()
        - sin_declination * latitude.sin())
        / (cos_declination * latitude.cos());
    if !(-1.0..=1.0).contains(&cos_hour_angle) {
        return None;
    }

    let hour_angle_degrees = cos_hour_angle.acos().to_degrees();
    let hour_angle = match kind {
        SolarEventKind::Sunrise => (360.0 - hour_angle_degrees) / 15.0,
        SolarEventKind::Sunset => hour_angle_degrees / 15.0,
    };

    let local_mean_time =
        hour_angle + right_ascension_hours - SIDEREAL_DRIFT * n - LOCAL_MEAN_TIME_OFFSET;
    let universal_time = local_mean_time - coordinate.longitude() / 15.0;
    let local = (universal_time + utc_offset_hours).rem_euclid(24.0);
    // rem_euclid can round a tiny negative value up to exactly 24.0.
    Some(if local >= 24.0 { 0.0 } else { local })
}
