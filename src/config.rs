use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "sidduril.toml";

/// Top-level Sidduril configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SiddurilConfig {
    /// Fixed location used instead of the default fallback.
    #[serde(default)]
    pub location: LocationToml,

    /// Sunrise/sunset settings.
    #[serde(default)]
    pub solar: SolarToml,

    /// Prayer text settings.
    #[serde(default)]
    pub prayers: PrayersToml,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolarToml {
    #[serde(default = "default_zenith")]
    pub zenith: String,
    #[serde(default)]
    pub utc_offset: Option<f64>,
}

impl Default for SolarToml {
    fn default() -> Self {
        Self {
            zenith: default_zenith(),
            utc_offset: None,
        }
    }
}

fn default_zenith() -> String {
    "official".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrayersToml {
    #[serde(default = "default_prayers_dir")]
    pub dir: PathBuf,
}

impl Default for PrayersToml {
    fn default() -> Self {
        Self {
            dir: default_prayers_dir(),
        }
    }
}

fn default_prayers_dir() -> PathBuf {
    PathBuf::from("prayers")
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is read
/// when present and built-in defaults are used otherwise.
pub fn load(explicit: Option<&Path>) -> Result<SiddurilConfig> {
    let path = match explicit {
        Some(path) => path,
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_PATH);
            if !fallback.is_file() {
                debug!("no config file, using defaults");
                return Ok(SiddurilConfig::default());
            }
            fallback
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: SiddurilConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: SiddurilConfig = toml::from_str("").unwrap();
        assert_eq!(config.location.latitude, None);
        assert_eq!(config.solar.zenith, "official");
        assert_eq!(config.solar.utc_offset, None);
        assert_eq!(config.prayers.dir, PathBuf::from("prayers"));
    }

    #[test]
    fn full_document() {
        let config: SiddurilConfig = toml::from_str(
            r#"
            [location]
            latitude = 40.7128
            longitude = -74.006

            [solar]
            zenith = "civil"
            utc_offset = -4.0

            [prayers]
            dir = "/opt/sidduril/texts"
            "#,
        )
        .unwrap();
        assert_eq!(config.location.latitude, Some(40.7128));
        assert_eq!(config.location.longitude, Some(-74.006));
        assert_eq!(config.solar.zenith, "civil");
        assert_eq!(config.solar.utc_offset, Some(-4.0));
        assert_eq!(config.prayers.dir, PathBuf::from("/opt/sidduril/texts"));
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<SiddurilConfig, _> = toml::from_str("[solar]\nelevation = 800\n");
        assert!(result.is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn explicit_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sidduril.toml");
        std::fs::write(&path, "[solar]\nutc_offset = 2.0\n").unwrap();
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.solar.utc_offset, Some(2.0));
    }
}
