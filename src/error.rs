//! Error types for caller contract violations.

use thiserror::Error;

/// Errors raised by [`TranslationCollection`](crate::TranslationCollection).
///
/// Every operation is pure in-memory computation, so each variant signals a
/// caller contract violation rather than a transient fault; there is nothing
/// to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// `add_keys` was given key and entry sequences of different lengths.
    #[error("key/data length mismatch: {keys} keys, {data} entries")]
    LengthMismatch { keys: usize, data: usize },

    /// A context was addressed that does not exist in the collection.
    #[error("context not found: {0:?}")]
    ContextNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let err = CollectionError::LengthMismatch { keys: 3, data: 2 };
        assert_eq!(err.to_string(), "key/data length mismatch: 3 keys, 2 entries");
    }

    #[test]
    fn test_context_not_found_display() {
        let err = CollectionError::ContextNotFound("menu".to_string());
        assert_eq!(err.to_string(), "context not found: \"menu\"");
    }
}
