//! World state storage abstraction.
//!
//! `WorldState` is the external key-value store the contract reads and
//! writes through its transaction context. Every method may fail; the
//! contract surfaces those failures unchanged and never retries.
//!
//! Implementations:
//! - `MemStore` (this crate): in-memory BTreeMap
//! - `MockStub` (this crate): scripted faults for tests
//! - the ledger runtime's stub, supplied by the host process

use crate::error::StateError;

/// Abstraction over the world state key-value store.
///
/// The store owns all persisted bytes. Callers hold no copies across
/// invocations.
pub trait WorldState: Send + Sync {
    /// Get the value stored under `key`.
    ///
    /// Returns `Ok(None)` if no value is present. A present empty value is
    /// `Ok(Some(vec![]))`, which is not absence.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError>;

    /// Store `value` under `key`, replacing any previous value.
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StateError>;

    /// Remove the value stored under `key`.
    fn del_state(&mut self, key: &str) -> Result<(), StateError>;

    /// Check if a value is present under `key`.
    ///
    /// Default implementation uses `get_state()`, but backends may optimize this.
    fn contains(&self, key: &str) -> Result<bool, StateError> {
        Ok(self.get_state(key)?.is_some())
    }
}
