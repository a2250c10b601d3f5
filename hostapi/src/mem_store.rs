//! In-memory world state.
//!
//! `MemStore` implements `WorldState` using a `BTreeMap` so iteration is
//! ordered by key. Writes and deletes are validated against a
//! `StubConfig`; reads accept any key.

use std::collections::BTreeMap;

use crate::error::StateError;
use crate::state_store::WorldState;
use crate::types::StubConfig;

/// In-memory world state backed by `BTreeMap`.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    data: BTreeMap<String, Vec<u8>>,
    config: StubConfig,
}

impl MemStore {
    /// Create a new empty store with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with custom limits.
    pub fn with_config(config: StubConfig) -> Self {
        Self {
            data: BTreeMap::new(),
            config,
        }
    }

    /// Create a store pre-populated with data.
    ///
    /// Seeded entries bypass validation so tests can plant arbitrary bytes.
    pub fn with_data(data: BTreeMap<String, Vec<u8>>) -> Self {
        Self {
            data,
            config: StubConfig::default(),
        }
    }

    pub fn config(&self) -> &StubConfig {
        &self.config
    }

    /// Returns the number of entries in the store.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl WorldState for MemStore {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        Ok(self.data.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StateError> {
        self.config.validate_key(key)?;
        self.config.validate_value(value)?;
        self.data.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn del_state(&mut self, key: &str) -> Result<(), StateError> {
        self.config.validate_key(key)?;
        self.data.remove(key);
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, StateError> {
        Ok(self.data.contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = MemStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.get_state("missing").unwrap(), None);
        assert!(!store.contains("missing").unwrap());
    }

    #[test]
    fn test_put_and_get() {
        let mut store = MemStore::new();
        store.put_state("key1", b"value1").unwrap();

        assert_eq!(store.get_state("key1").unwrap(), Some(b"value1".to_vec()));
        assert!(store.contains("key1").unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_overwrite() {
        let mut store = MemStore::new();
        store.put_state("key1", b"v1").unwrap();
        store.put_state("key1", b"v2").unwrap();

        assert_eq!(store.get_state("key1").unwrap(), Some(b"v2".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete() {
        let mut store = MemStore::new();
        store.put_state("key1", b"value1").unwrap();
        store.del_state("key1").unwrap();

        assert_eq!(store.get_state("key1").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut store = MemStore::new();
        store.del_state("never-written").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_empty_value_is_present() {
        let mut store = MemStore::new();
        store.put_state("empty_val", b"").unwrap();

        assert_eq!(store.get_state("empty_val").unwrap(), Some(vec![]));
        assert!(store.contains("empty_val").unwrap());
    }

    #[test]
    fn test_reads_accept_any_key() {
        let store = MemStore::new();
        assert_eq!(store.get_state("").unwrap(), None);
        assert_eq!(store.get_state("\u{0}ns\u{0}").unwrap(), None);
        assert_eq!(store.get_state(&"k".repeat(10_000)).unwrap(), None);
    }

    #[test]
    fn test_writes_validate_keys() {
        let mut store = MemStore::new();
        assert_eq!(store.put_state("", b"v"), Err(StateError::empty_key()));
        assert_eq!(store.del_state(""), Err(StateError::empty_key()));
        assert!(matches!(
            store.put_state("\u{0}ns", b"v"),
            Err(StateError::InvalidKey { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_custom_limits() {
        let mut store = MemStore::with_config(StubConfig {
            max_key_len: 3,
            max_value_len: 2,
        });
        assert_eq!(
            store.put_state("abcd", b"v"),
            Err(StateError::KeyTooLarge { len: 4, max: 3 })
        );
        assert_eq!(
            store.put_state("abc", b"xyz"),
            Err(StateError::ValueTooLarge { len: 3, max: 2 })
        );
        store.put_state("abc", b"xy").unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_with_data_and_iter_order() {
        let mut data = BTreeMap::new();
        data.insert("b".to_string(), b"2".to_vec());
        data.insert("a".to_string(), b"1".to_vec());

        let store = MemStore::with_data(data);
        assert_eq!(store.len(), 2);
        let keys: Vec<&str> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
