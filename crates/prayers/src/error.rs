//! Error types for sidduril-prayers.

use std::path::PathBuf;

/// Error type for all fallible operations in the sidduril-prayers crate.
#[derive(Debug, thiserror::Error)]
pub enum PrayerError {
    /// Returned when the prayer directory does not exist.
    #[error("prayer directory not found: {}", path.display())]
    MissingDirectory {
        /// Directory that was searched.
        path: PathBuf,
    },

    /// Returned when the prayer directory cannot be listed.
    #[error("failed to read prayer directory {}: {source}", path.display())]
    Io {
        /// Directory that was being listed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_missing_directory() {
        let err = PrayerError::MissingDirectory {
            path: PathBuf::from("/nowhere"),
        };
        assert_eq!(err.to_string(), "prayer directory not found: /nowhere");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<PrayerError>();
    }
}
