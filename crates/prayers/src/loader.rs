//! Loading prayer texts from a directory of `.txt` files.

use std::collections::HashMap;
use std::fs::{self, DirEntry};
use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::PrayerError;
use crate::prayer::{Prayer, SERVICE_ORDER};

/// Loads the known services from `dir` in [`SERVICE_ORDER`].
///
/// Each service is read from `<slug>.txt` as UTF-8. Files for unknown
/// services are ignored; a known file that cannot be read is skipped with a
/// warning, so one damaged text does not hide the others. Services without a
/// file are simply absent from the result.
///
/// # Errors
///
/// Returns [`PrayerError::MissingDirectory`] if `dir` does not exist and
/// [`PrayerError::Io`] if it cannot be listed.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn load_prayers(dir: &Path) -> Result<Vec<Prayer>, PrayerError> {
    if !dir.is_dir() {
        return Err(PrayerError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }
    let entries = fs::read_dir(dir).map_err(|source| PrayerError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut by_slug: HashMap<String, Prayer> = HashMap::new();
    for entry in entries.filter_map(|entry| readable_entry(entry, dir)) {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if !SERVICE_ORDER.contains(&slug) {
            debug!(file = %path.display(), "ignoring unknown prayer file");
            continue;
        }
        match fs::read_to_string(&path) {
            Ok(text) => {
                by_slug.insert(slug.to_string(), Prayer::new(slug, text));
            }
            Err(e) => warn!(file = %path.display(), error = %e, "skipping unreadable prayer"),
        }
    }

    let prayers: Vec<Prayer> = SERVICE_ORDER
        .iter()
        .filter_map(|slug| by_slug.remove(*slug))
        .collect();
    debug!(n_prayers = prayers.len(), "prayers loaded");
    Ok(prayers)
}

/// Unwraps a directory entry, warning about and skipping entries that could
/// not be read.
fn readable_entry(entry: io::Result<DirEntry>, dir: &Path) -> Option<DirEntry> {
    match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "skipping unreadable directory entry");
            None
        }
    }
}
