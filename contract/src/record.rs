//! The persisted record and its world state encoding.
//!
//! A record is stored as a JSON object with a single `value` field:
//!
//! ```text
//! {"value":"<string>"}
//! ```
//!
//! Field names match case-insensitively on read (`value` or `Value`) and
//! unknown fields are ignored. An object without `value`, or a JSON `null`,
//! reads as an empty value. The record id is the store key and is not part
//! of the encoding.

use serde::{Deserialize, Serialize};

/// The only entity managed by the contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, alias = "Value", alias = "VALUE")]
    pub value: String,
}

impl Record {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Canonical encoding written to the world state.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Decode stored bytes. Fails on bytes that are not a JSON object or
    /// `null`, or when `value` is present but not a string.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let record: Option<Self> = serde_json::from_slice(bytes)?;
        Ok(record.unwrap_or_default())
    }
}
