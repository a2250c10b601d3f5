//! Host-side configuration for the in-memory stores.
//!
//! `StubConfig` bundles the key and value limits a store enforces on writes.

use chaincode_primitives::{COMPOSITE_KEY_NAMESPACE, MAX_KEY_LEN, MAX_VALUE_LEN};

use crate::error::StateError;

/// Limits enforced by `MemStore` on `put_state` and `del_state`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubConfig {
    /// Maximum length of a key in bytes.
    pub max_key_len: usize,
    /// Maximum length of a value in bytes.
    pub max_value_len: usize,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            max_key_len: MAX_KEY_LEN,
            max_value_len: MAX_VALUE_LEN,
        }
    }
}

impl StubConfig {
    /// Check a key used for a write or delete.
    ///
    /// Reads are never validated; any string may be probed.
    pub fn validate_key(&self, key: &str) -> Result<(), StateError> {
        if key.is_empty() {
            return Err(StateError::empty_key());
        }
        if key.starts_with(COMPOSITE_KEY_NAMESPACE) {
            return Err(StateError::reserved_namespace(key));
        }
        if key.len() > self.max_key_len {
            return Err(StateError::KeyTooLarge {
                len: key.len(),
                max: self.max_key_len,
            });
        }
        Ok(())
    }

    /// Check a value about to be written.
    pub fn validate_value(&self, value: &[u8]) -> Result<(), StateError> {
        if value.len() > self.max_value_len {
            return Err(StateError::ValueTooLarge {
                len: value.len(),
                max: self.max_value_len,
            });
        }
        Ok(())
    }
}
