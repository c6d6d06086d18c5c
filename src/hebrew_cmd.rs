//! Hebrew date and numeral commands.

use anyhow::Result;
use chrono::Local;
use tracing::info_span;

use sidduril_calendar::is_hebrew_leap_year;
use sidduril_hebrew::{format_hebrew_date, numeral_of};

use crate::cli::{HebrewDateArgs, NumeralArgs};
use crate::today_cmd;

/// Formats either an explicit Hebrew triple or a civil date.
pub fn render(args: &HebrewDateArgs) -> Result<String> {
    if let (Some(day), Some(month), Some(year)) = (args.day, args.month, args.year) {
        let leap = args.leap.unwrap_or_else(|| is_hebrew_leap_year(year));
        return Ok(format_hebrew_date(day, month, year, leap)?);
    }
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    today_cmd::hebrew_lines(date)
}

/// Run the hebrew-date command.
pub fn run(args: HebrewDateArgs) -> Result<()> {
    let _cmd = info_span!("hebrew-date").entered();
    println!("{}", render(&args)?);
    Ok(())
}

/// Run the numeral command.
pub fn run_numeral(args: NumeralArgs) -> Result<()> {
    println!("{}", numeral_of(args.number));
    Ok(())
}
