//! Store fault type.
//!
//! `StateError` is returned by every `WorldState` method. The contract
//! never inspects the variant; it wraps the error as a store fault and
//! forwards it to its caller.

/// Failure of a world state `get`, `put`, or `delete`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// The key is empty or starts with the composite key namespace.
    #[error("invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: &'static str },

    /// The key exceeds the configured maximum length.
    #[error("key length {len} exceeds maximum {max}")]
    KeyTooLarge { len: usize, max: usize },

    /// The value exceeds the configured maximum length.
    #[error("value length {len} exceeds maximum {max}")]
    ValueTooLarge { len: usize, max: usize },

    /// The backing store could not serve the request.
    #[error("{0}")]
    Unavailable(String),
}

impl StateError {
    /// Create a backend failure with the given message.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create an empty-key error.
    pub fn empty_key() -> Self {
        Self::InvalidKey {
            key: String::new(),
            reason: "key must not be an empty string",
        }
    }

    /// Create a reserved-namespace error for `key`.
    pub fn reserved_namespace(key: &str) -> Self {
        Self::InvalidKey {
            key: key.to_string(),
            reason: "simple keys must not start with the composite key namespace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display_is_cause() {
        let err = StateError::unavailable("world state get error");
        assert_eq!(err.to_string(), "world state get error");
    }

    #[test]
    fn test_limit_display() {
        let err = StateError::KeyTooLarge { len: 300, max: 256 };
        assert_eq!(err.to_string(), "key length 300 exceeds maximum 256");

        let err = StateError::ValueTooLarge { len: 10, max: 5 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_invalid_key_display() {
        let s = StateError::empty_key().to_string();
        assert!(s.contains("empty string"));

        let s = StateError::reserved_namespace("\u{0}abc").to_string();
        assert!(s.contains("composite key namespace"));
    }
}
