use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Sidduril prayer-book companion.
#[derive(Parser)]
#[command(
    name = "sidduril",
    version,
    about = "Hebrew date, sunrise and sunset, and prayer texts"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: sidduril.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the weekday, Hebrew date, sunrise and sunset.
    Today(TodayArgs),
    /// Compute sunrise and sunset.
    Sun(SunArgs),
    /// Format a Hebrew date.
    HebrewDate(HebrewDateArgs),
    /// Render a number as a Hebrew numeral.
    Numeral(NumeralArgs),
    /// List or show prayer texts.
    #[command(subcommand)]
    Prayers(PrayersCommand),
}

/// Date, place and offset shared by the solar commands.
#[derive(clap::Args)]
pub struct PlaceArgs {
    /// Civil date (YYYY-MM-DD); defaults to today.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Latitude in degrees, north positive.
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees, east positive.
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// UTC offset in hours; defaults to config, then the system time zone.
    #[arg(long = "utc-offset", allow_negative_numbers = true)]
    pub utc_offset: Option<f64>,
}

/// Arguments for the `today` subcommand.
#[derive(clap::Args)]
pub struct TodayArgs {
    #[command(flatten)]
    pub place: PlaceArgs,
}

/// Arguments for the `sun` subcommand.
#[derive(clap::Args)]
pub struct SunArgs {
    #[command(flatten)]
    pub place: PlaceArgs,

    /// Zenith: official, civil, nautical, astronomical, or degrees.
    #[arg(short, long)]
    pub zenith: Option<String>,
}

/// Arguments for the `hebrew-date` subcommand.
#[derive(clap::Args)]
pub struct HebrewDateArgs {
    /// Civil date to convert (YYYY-MM-DD); defaults to today.
    #[arg(long, conflicts_with_all = ["day", "month", "year"])]
    pub date: Option<NaiveDate>,

    /// Hebrew day of month.
    #[arg(long, requires_all = ["month", "year"])]
    pub day: Option<u8>,

    /// Hebrew month, counted from Tishrei.
    #[arg(long, requires_all = ["day", "year"])]
    pub month: Option<u8>,

    /// Hebrew year (Anno Mundi).
    #[arg(long, requires_all = ["day", "month"], allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Treat the year as a leap year (`--leap` or `--leap=false`); defaults
    /// to the calendar's answer.
    #[arg(
        long,
        requires = "year",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub leap: Option<bool>,
}

/// Arguments for the `numeral` subcommand.
#[derive(clap::Args)]
pub struct NumeralArgs {
    /// Number to render.
    pub number: u32,
}

/// Prayer subcommands.
#[derive(Subcommand)]
pub enum PrayersCommand {
    /// List available prayers in service order.
    List(PrayerDirArgs),
    /// Print one prayer text.
    Show(ShowPrayerArgs),
}

/// Directory override shared by prayer subcommands.
#[derive(clap::Args)]
pub struct PrayerDirArgs {
    /// Directory containing the prayer `.txt` files.
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// Arguments for `prayers show`.
#[derive(clap::Args)]
pub struct ShowPrayerArgs {
    /// Prayer file stem (e.g. `mincha`) or Hebrew name.
    pub name: String,

    #[command(flatten)]
    pub dir: PrayerDirArgs,
}
