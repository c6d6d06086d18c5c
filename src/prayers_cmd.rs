//! Prayers command: list and show bundled prayer texts.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use sidduril_prayers::{Prayer, find_prayer, load_prayers};

use crate::cli::{PrayerDirArgs, PrayersCommand};
use crate::config::SiddurilConfig;

/// Picks the prayer directory: command line, then config.
fn prayer_dir(args: &PrayerDirArgs, config: &SiddurilConfig) -> PathBuf {
    args.dir.clone().unwrap_or_else(|| config.prayers.dir.clone())
}

fn load(dir: &Path) -> Result<Vec<Prayer>> {
    let prayers = load_prayers(dir)
        .with_context(|| format!("failed to load prayers from {}", dir.display()))?;
    info!(n_prayers = prayers.len(), "prayers loaded");
    Ok(prayers)
}

/// Renders one line per prayer: Hebrew name and file stem.
pub fn render_list(prayers: &[Prayer]) -> String {
    prayers
        .iter()
        .map(|p| format!("{} ({})", p.name(), p.slug()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the prayers command.
pub fn run(command: PrayersCommand, config: &SiddurilConfig) -> Result<()> {
    let _cmd = info_span!("prayers").entered();
    match command {
        PrayersCommand::List(args) => {
            let prayers = load(&prayer_dir(&args, config))?;
            println!("{}", render_list(&prayers));
        }
        PrayersCommand::Show(args) => {
            let prayers = load(&prayer_dir(&args.dir, config))?;
            let prayer = find_prayer(&prayers, &args.name)
                .ok_or_else(|| anyhow!("no prayer named {:?}", args.name))?;
            println!("{}\n\n{}", prayer.name(), prayer.text());
        }
    }
    Ok(())
}
