//! Scripted world state for testing fault paths.
//!
//! `MockStub` answers `get_state` from a per-key script (value, absent, or
//! fault) and can be told to fail `put_state`/`del_state` for specific
//! keys. Every write attempt is recorded in call order, whether or not it
//! succeeded, so tests can assert that a rejected operation never wrote.

use std::collections::BTreeMap;

use crate::error::StateError;
use crate::state_store::WorldState;

/// A write attempted against a `MockStub`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubCall {
    Put { key: String, value: Vec<u8> },
    Delete { key: String },
}

#[derive(Debug, Clone)]
enum Scripted {
    Value(Vec<u8>),
    Fault(String),
}

/// Scripted `WorldState`. Keys with no script read as absent.
#[derive(Debug, Clone, Default)]
pub struct MockStub {
    gets: BTreeMap<String, Scripted>,
    put_faults: BTreeMap<String, String>,
    delete_faults: BTreeMap<String, String>,
    calls: Vec<StubCall>,
}

impl MockStub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `key` to hold `value`.
    pub fn with_value(mut self, key: &str, value: impl Into<Vec<u8>>) -> Self {
        self.gets.insert(key.to_string(), Scripted::Value(value.into()));
        self
    }

    /// Script `get_state(key)` to fail with `msg`.
    pub fn with_get_fault(mut self, key: &str, msg: &str) -> Self {
        self.gets.insert(key.to_string(), Scripted::Fault(msg.to_string()));
        self
    }

    /// Script `put_state(key, _)` to fail with `msg`.
    pub fn with_put_fault(mut self, key: &str, msg: &str) -> Self {
        self.put_faults.insert(key.to_string(), msg.to_string());
        self
    }

    /// Script `del_state(key)` to fail with `msg`.
    pub fn with_delete_fault(mut self, key: &str, msg: &str) -> Self {
        self.delete_faults.insert(key.to_string(), msg.to_string());
        self
    }

    /// All write attempts, in order.
    pub fn calls(&self) -> &[StubCall] {
        &self.calls
    }

    /// Number of write attempts.
    pub fn writes(&self) -> usize {
        self.calls.len()
    }

    /// Returns true if a put of exactly `value` under `key` was attempted.
    pub fn put_called(&self, key: &str, value: &[u8]) -> bool {
        self.calls.iter().any(|call| {
            matches!(call, StubCall::Put { key: k, value: v } if k == key && v == value)
        })
    }

    /// Returns true if a delete of `key` was attempted.
    pub fn delete_called(&self, key: &str) -> bool {
        self.calls
            .iter()
            .any(|call| matches!(call, StubCall::Delete { key: k } if k == key))
    }
}

impl WorldState for MockStub {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        match self.gets.get(key) {
            Some(Scripted::Value(v)) => Ok(Some(v.clone())),
            Some(Scripted::Fault(msg)) => Err(StateError::unavailable(msg.clone())),
            None => Ok(None),
        }
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StateError> {
        self.calls.push(StubCall::Put {
            key: key.to_string(),
            value: value.to_vec(),
        });
        if let Some(msg) = self.put_faults.get(key) {
            return Err(StateError::unavailable(msg.clone()));
        }
        self.gets.insert(key.to_string(), Scripted::Value(value.to_vec()));
        Ok(())
    }

    fn del_state(&mut self, key: &str) -> Result<(), StateError> {
        self.calls.push(StubCall::Delete {
            key: key.to_string(),
        });
        if let Some(msg) = self.delete_faults.get(key) {
            return Err(StateError::unavailable(msg.clone()));
        }
        self.gets.remove(key);
        Ok(())
    }
}
