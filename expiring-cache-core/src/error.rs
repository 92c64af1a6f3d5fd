//! Error types for the expiring cache.
//!
//! An entry that exists but has expired is not an error. The only failure a
//! lookup can report is a key that was never stored.

use thiserror::Error;

/// Result type alias using `CacheError`.
pub type Result<T> = std::result::Result<T, CacheError>;

/// Error returned by cache lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// No entry was ever stored under the key.
    #[error("key does not exist in cache: {0}")]
    KeyNotFound(String),
}

impl CacheError {
    /// Returns the key the failed lookup was made with.
    pub fn key(&self) -> &str {
        match self {
            CacheError::KeyNotFound(key) => key,
        }
    }

    /// Returns true if the key was never stored.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CacheError::KeyNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("foo", "key does not exist in cache: foo" ; "plain key")]
    #[test_case("", "key does not exist in cache: " ; "empty key")]
    #[test_case("a b", "key does not exist in cache: a b" ; "key with space")]
    fn test_error_display(key: &str, expected: &str) {
        let err = CacheError::KeyNotFound(key.into());
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_error_carries_key() {
        let err = CacheError::KeyNotFound("session:42".into());
        assert_eq!(err.key(), "session:42");
        assert!(err.is_not_found());
    }
}
