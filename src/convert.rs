//! Pure conversion functions: TOML config and CLI values -> crate API types.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, TimeZone};

use sidduril_solar::{SolarConfig, Zenith};

use crate::config::SolarToml;

/// Parses a zenith name or an angle in degrees.
pub fn parse_zenith(s: &str) -> Result<Zenith> {
    match s.to_lowercase().as_str() {
        "official" => Ok(Zenith::Official),
        "civil" => Ok(Zenith::Civil),
        "nautical" => Ok(Zenith::Nautical),
        "astronomical" => Ok(Zenith::Astronomical),
        other => {
            let degrees: f64 = other
                .parse()
                .with_context(|| format!("unknown zenith: {other:?}"))?;
            Ok(Zenith::Custom(degrees))
        }
    }
}

/// Builds a [`SolarConfig`] from the TOML solar section, with an optional
/// zenith override from the command line.
pub fn build_solar_config(solar: &SolarToml, zenith_override: Option<&str>) -> Result<SolarConfig> {
    let zenith = parse_zenith(zenith_override.unwrap_or(&solar.zenith))?;
    let config = SolarConfig::new().with_zenith(zenith);
    config.validate()?;
    Ok(config)
}

/// Picks the UTC offset in hours: command line, then config, then the
/// system time zone on `date`.
pub fn resolve_utc_offset(cli: Option<f64>, solar: &SolarToml, date: NaiveDate) -> f64 {
    cli.or(solar.utc_offset)
        .unwrap_or_else(|| system_utc_offset(date))
}

/// Offset of the system time zone from UTC on `date`, in hours.
fn system_utc_offset(date: NaiveDate) -> f64 {
    f64::from(Local.offset_from_utc_date(&date).local_minus_utc()) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zenith_names() {
        assert_eq!(parse_zenith("official").unwrap(), Zenith::Official);
        assert_eq!(parse_zenith("Civil").unwrap(), Zenith::Civil);
        assert_eq!(parse_zenith("NAUTICAL").unwrap(), Zenith::Nautical);
        assert_eq!(parse_zenith("astronomical").unwrap(), Zenith::Astronomical);
    }

    #[test]
    fn zenith_degrees() {
        assert_eq!(parse_zenith("93.5").unwrap(), Zenith::Custom(93.5));
        assert!(parse_zenith("dusk").is_err());
    }

    #[test]
    fn solar_config_override_wins() {
        let solar = SolarToml::default();
        let cfg = build_solar_config(&solar, Some("civil")).unwrap();
        assert_eq!(cfg.zenith(), Zenith::Civil);
        let cfg = build_solar_config(&solar, None).unwrap();
        assert_eq!(cfg.zenith(), Zenith::Official);
    }

    #[test]
    fn solar_config_rejects_bad_angle() {
        assert!(build_solar_config(&SolarToml::default(), Some("270")).is_err());
    }

    #[test]
    fn utc_offset_precedence() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        let solar = SolarToml {
            utc_offset: Some(2.0),
            ..SolarToml::default()
        };
        assert_eq!(resolve_utc_offset(Some(3.0), &solar, date), 3.0);
        assert_eq!(resolve_utc_offset(None, &solar, date), 2.0);
        let system = resolve_utc_offset(None, &SolarToml::default(), date);
        assert!((-14.0..=14.0).contains(&system));
    }
}
