use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "sidduril",
    "sidduril_calendar",
    "sidduril_hebrew",
    "sidduril_prayers",
    "sidduril_solar",
];

/// Maps CLI verbosity to a level: none -> warn, -v -> info, -vv -> debug,
/// -vvv and up -> trace.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the default filter directive covering every workspace crate.
fn default_filter(verbosity: u8) -> String {
    let level = level_for(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing based on CLI verbosity level.
///
/// `RUST_LOG` env var overrides the CLI flag if set. Logs go to stderr so
/// they never mix with command output.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn filter_covers_all_crates() {
        let filter = default_filter(1);
        for target in CRATE_TARGETS {
            assert!(filter.contains(&format!("{target}=info")), "{filter}");
        }
    }
}
