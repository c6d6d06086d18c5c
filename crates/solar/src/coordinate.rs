//! Validated geographic coordinate.

use crate::error::SolarError;

/// A point on the Earth in decimal degrees, north and east positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Jerusalem, used when no location fix is available.
    pub const DEFAULT: Self = Self {
        latitude: 31.7683,
        longitude: 35.2137,
    };

    /// Creates a new coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::InvalidCoordinate`] if either value is not finite,
    /// latitude is outside [-90, 90], or longitude is outside [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, SolarError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if !valid {
            return Err(SolarError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Returns the latitude in degrees.
    pub fn latitude(self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    pub fn longitude(self) -> f64 {
        self.longitude
    }
}

impl Default for GeoCoordinate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let c = GeoCoordinate::new(51.5, -0.12).unwrap();
        assert_eq!(c.latitude(), 51.5);
        assert_eq!(c.longitude(), -0.12);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(GeoCoordinate::new(90.0, 180.0).is_ok());
        assert!(GeoCoordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(GeoCoordinate::new(90.1, 0.0).is_err());
        assert!(GeoCoordinate::new(-91.0, 0.0).is_err());
        assert!(GeoCoordinate::new(0.0, 180.5).is_err());
        assert!(GeoCoordinate::new(0.0, -200.0).is_err());
    }

    #[test]
    fn non_finite_rejected() {
        assert!(GeoCoordinate::new(f64::NAN, 0.0).is_err());
        assert!(GeoCoordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn default_is_jerusalem() {
        let c = GeoCoordinate::default();
        assert_eq!(c, GeoCoordinate::DEFAULT);
        assert_eq!(c.latitude(), 31.7683);
        assert_eq!(c.longitude(), 35.2137);
    }
}
