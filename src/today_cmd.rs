//! Today command: weekday, Hebrew date, sunrise and sunset.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use tracing::{debug, info_span};

use sidduril_calendar::{HebrewDate, fixed_from_gregorian, weekday_from_fixed};
use sidduril_hebrew::{format_hebrew_date, weekday_name};

use crate::cli::TodayArgs;
use crate::config::SiddurilConfig;
use crate::sun_cmd;

/// Renders the Hebrew weekday and date lines for a civil date.
pub fn hebrew_lines(date: NaiveDate) -> Result<String> {
    let (year, month, day) = (date.year(), date.month() as u8, date.day() as u8);
    let hebrew = HebrewDate::from_gregorian(year, month, day)
        .with_context(|| format!("failed to convert {date} to the Hebrew calendar"))?;
    let fixed = fixed_from_gregorian(year, month, day)?;
    debug!(
        year = hebrew.year(),
        month = hebrew.month(),
        day = hebrew.day(),
        "hebrew date"
    );
    let weekday = weekday_name(weekday_from_fixed(fixed));
    let text = format_hebrew_date(
        hebrew.day(),
        hebrew.month(),
        hebrew.year(),
        hebrew.is_leap_year(),
    )?;
    Ok(format!("{weekday}\n{text}"))
}

/// Run the today command.
pub fn run(args: TodayArgs, config: &SiddurilConfig) -> Result<()> {
    let _cmd = info_span!("today").entered();
    let (date, _, times) = sun_cmd::compute(&args.place, config, None)?;
    println!("{}", hebrew_lines(date)?);
    println!("{}", sun_cmd::render(&times));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seventh_of_cheshvan_5787() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(hebrew_lines(date).unwrap(), "יום ראשון\nז׳ חשון תשפ״ז");
    }

    #[test]
    fn purim_in_adar_ii() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 24).unwrap();
        assert_eq!(hebrew_lines(date).unwrap(), "יום ראשון\nי״ד אדר ב׳ תשפ״ד");
    }

    #[test]
    fn weekday_line_covers_the_week() {
        let expected = [
            "יום ראשון",
            "יום שני",
            "יום שלישי",
            "יום רביעי",
            "יום חמישי",
            "יום שישי",
            "יום שבת",
        ];
        for (offset, name) in expected.iter().enumerate() {
            let date = NaiveDate::from_ymd_opt(2026, 10, 18 + offset as u32).unwrap();
            let lines = hebrew_lines(date).unwrap();
            assert_eq!(lines.lines().next(), Some(*name), "{date}");
        }
    }
}
