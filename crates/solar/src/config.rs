//! Configuration for sunrise/sunset computation.

use crate::error::SolarError;

/// Sun position that counts as rising or setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Zenith {
    /// Visible sunrise/sunset: 90°50′, including refraction and the solar radius.
    Official,
    /// Civil twilight, 96°.
    Civil,
    /// Nautical twilight, 102°.
    Nautical,
    /// Astronomical twilight, 108°.
    Astronomical,
    /// Any other zenith angle, in degrees.
    Custom(f64),
}

impl Zenith {
    /// Returns the zenith angle in degrees.
    pub fn degrees(self) -> f64 {
        match self {
            Self::Official => 90.8333,
            Self::Civil => 96.0,
            Self::Nautical => 102.0,
            Self::Astronomical => 108.0,
            Self::Custom(degrees) => degrees,
        }
    }
}

/// Configuration for [`crate::sun_times`].
///
/// # Example
///
/// ```
/// use sidduril_solar::{SolarConfig, Zenith};
///
/// let config = SolarConfig::new().with_zenith(Zenith::Civil);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct SolarConfig {
    zenith: Zenith,
}

impl SolarConfig {
    /// Creates a configuration with the official (visual) zenith.
    pub fn new() -> Self {
        Self {
            zenith: Zenith::Official,
        }
    }

    /// Sets the zenith used for both events.
    pub fn with_zenith(mut self, zenith: Zenith) -> Self {
        self.zenith = zenith;
        self
    }

    /// Returns the zenith.
    pub fn zenith(&self) -> Zenith {
        self.zenith
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::InvalidZenith`] if the zenith angle is not finite
    /// or lies outside the open interval (0, 180).
    pub fn validate(&self) -> Result<(), SolarError> {
        let degrees = self.zenith.degrees();
        if !degrees.is_finite() || degrees <= 0.0 || degrees >= 180.0 {
            return Err(SolarError::InvalidZenith { degrees });
        }
        Ok(())
    }
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self::new()
    }
}
