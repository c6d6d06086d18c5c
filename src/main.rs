mod cli;
mod config;
mod convert;
mod hebrew_cmd;
mod location;
mod logging;
mod prayers_cmd;
mod sun_cmd;
mod today_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Today(args) => today_cmd::run(args, &config),
        Command::Sun(args) => sun_cmd::run(args, &config),
        Command::HebrewDate(args) => hebrew_cmd::run(args),
        Command::Numeral(args) => hebrew_cmd::run_numeral(args),
        Command::Prayers(command) => prayers_cmd::run(command, &config),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "sidduril", "sun", "--lat", "-33.87", "--lon", "151.21", "--utc-offset", "10",
        ])
        .unwrap();
        let Command::Sun(args) = cli.command else {
            panic!("expected sun command");
        };
        assert_eq!(args.place.lat, Some(-33.87));
        assert_eq!(args.place.utc_offset, Some(10.0));
    }

    #[test]
    fn hebrew_triple_requires_all_parts() {
        assert!(Cli::try_parse_from(["sidduril", "hebrew-date", "--day", "1"]).is_err());
        assert!(
            Cli::try_parse_from([
                "sidduril", "hebrew-date", "--day", "1", "--month", "1", "--year", "5785"
            ])
            .is_ok()
        );
    }

    fn parse_leap(extra: &[&str]) -> Option<bool> {
        let mut argv = vec![
            "sidduril", "hebrew-date", "--day", "1", "--month", "6", "--year", "5785",
        ];
        argv.extend_from_slice(extra);
        let cli = Cli::try_parse_from(argv).unwrap();
        let Command::HebrewDate(args) = cli.command else {
            panic!("expected hebrew-date command");
        };
        args.leap
    }

    #[test]
    fn leap_is_a_bare_flag() {
        assert_eq!(parse_leap(&[]), None);
        assert_eq!(parse_leap(&["--leap"]), Some(true));
        assert_eq!(parse_leap(&["--leap=false"]), Some(false));
    }
}
