//! Location resolution: an explicit fix or the default fallback.

use anyhow::{Result, bail};
use tracing::info;

use sidduril_solar::GeoCoordinate;

/// Outcome of looking for a location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationFix {
    /// A coordinate was supplied.
    Resolved(GeoCoordinate),
    /// Nothing was supplied; [`GeoCoordinate::DEFAULT`] is used.
    Fallback,
}

impl LocationFix {
    /// Returns the coordinate to compute with.
    pub fn coordinate(self) -> GeoCoordinate {
        match self {
            Self::Resolved(coordinate) => coordinate,
            Self::Fallback => GeoCoordinate::DEFAULT,
        }
    }
}

/// Resolves a location from a latitude/longitude pair.
///
/// Both missing falls back to the default coordinate. A lone latitude or
/// longitude, or an out-of-range pair, is an error rather than a fallback.
pub fn resolve(latitude: Option<f64>, longitude: Option<f64>) -> Result<LocationFix> {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => Ok(LocationFix::Resolved(GeoCoordinate::new(lat, lon)?)),
        (None, None) => {
            info!("no location given, using default coordinate");
            Ok(LocationFix::Fallback)
        }
        (Some(_), None) => bail!("latitude given without longitude"),
        (None, Some(_)) => bail!("longitude given without latitude"),
    }
}
