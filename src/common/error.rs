//! Error types for pagesim.

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All recoverable errors in pagesim.
///
/// Only configuration can fail. Once an engine exists, every request
/// succeeds and returns hit or miss; broken internal invariants are bugs
/// and panic instead of showing up here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A cache was configured with values that have no meaning, such as a
    /// negative capacity or an unknown eviction policy name.
    ///
    /// A capacity of zero is valid (the cache retains nothing) and never
    /// produces this error.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl Error {
    /// Check whether this error came from configuration validation.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Error::InvalidConfiguration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidConfiguration("capacity must be non-negative, got -1".into());
        assert_eq!(
            format!("{}", err),
            "invalid configuration: capacity must be non-negative, got -1"
        );
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
