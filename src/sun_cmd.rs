//! Sun command: sunrise and sunset for a date and place.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::info_span;

use sidduril_solar::{SunTimes, format_event, sun_times};

use crate::cli::{PlaceArgs, SunArgs};
use crate::config::SiddurilConfig;
use crate::convert;
use crate::location::{self, LocationFix};

/// Label shown before the sunrise time.
pub const SUNRISE_LABEL: &str = "זריחה";

/// Label shown before the sunset time.
pub const SUNSET_LABEL: &str = "שקיעה";

/// Computes sun times for the date and place given on the command line,
/// filling gaps from the config.
///
/// Coordinates are taken as a whole pair: from the command line if either
/// `--lat` or `--lon` is given, otherwise from `[location]`.
pub fn compute(
    place: &PlaceArgs,
    config: &SiddurilConfig,
    zenith: Option<&str>,
) -> Result<(NaiveDate, LocationFix, SunTimes)> {
    let date = place.date.unwrap_or_else(|| Local::now().date_naive());
    let (lat, lon) = if place.lat.is_some() || place.lon.is_some() {
        (place.lat, place.lon)
    } else {
        (config.location.latitude, config.location.longitude)
    };
    let fix = location::resolve(lat, lon)?;
    let solar_cfg = convert::build_solar_config(&config.solar, zenith)?;
    let offset = convert::resolve_utc_offset(place.utc_offset, &config.solar, date);
    let times = sun_times(fix.coordinate(), date, offset, &solar_cfg)
        .with_context(|| format!("failed to compute sun times for {date}"))?;
    Ok((date, fix, times))
}

/// Renders the two labelled time rows.
pub fn render(times: &SunTimes) -> String {
    format!(
        "{SUNRISE_LABEL} {}\n{SUNSET_LABEL} {}",
        format_event(times.sunrise),
        format_event(times.sunset)
    )
}

/// Run the sun command.
pub fn run(args: SunArgs, config: &SiddurilConfig) -> Result<()> {
    let _cmd = info_span!("sun").entered();
    let (date, fix, times) = compute(&args.place, config, args.zenith.as_deref())?;
    let coordinate = fix.coordinate();
    println!(
        "{date} ({:.4}, {:.4})",
        coordinate.latitude(),
        coordinate.longitude()
    );
    println!("{}", render(&times));
    Ok(())
}
