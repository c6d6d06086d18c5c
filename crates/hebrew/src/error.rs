//! Error types for the sidduril-hebrew crate.

/// Error type for the fallible formatting entry points.
///
/// Only the year is validated: day and month tokens outside the letter and
/// month tables render as empty strings instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HebrewError {
    /// Returned when the year is zero or negative.
    #[error("invalid year: {year} (must be >= 1)")]
    InvalidYear {
        /// The invalid year that was provided.
        year: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_year() {
        let err = HebrewError::InvalidYear { year: -3 };
        assert_eq!(err.to_string(), "invalid year: -3 (must be >= 1)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<HebrewError>();
    }
}
