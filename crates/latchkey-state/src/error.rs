//! Error types for the state store.

/// Result type alias for state-store operations.
pub type Result<T> = std::result::Result<T, StateError>;

/// Errors that can occur reading or writing persisted state.
///
/// Note that a malformed state *file* is not an error here: the store
/// recovers by treating it as empty. Only key-level and I/O problems
/// surface.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Requested key absent from the persisted state.
    #[error("State key not found: {key}")]
    KeyNotFound { key: String },

    /// Stored value has the wrong JSON type for the caller's expectation.
    #[error("State key {key} holds a {found} value, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Failed to write the state file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the state object.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StateError {
    /// Create a key-not-found error.
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Create a type-mismatch error.
    pub fn type_mismatch(key: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected,
            found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found_display() {
        let error = StateError::key_not_found("locked");
        assert_eq!(error.to_string(), "State key not found: locked");
    }

    #[test]
    fn test_type_mismatch_display() {
        let error = StateError::type_mismatch("locked", "boolean", "string");
        assert_eq!(
            error.to_string(),
            "State key locked holds a string value, expected boolean"
        );
    }
}
