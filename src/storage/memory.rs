//! In-memory key-value store

use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::StorageError;

/// Volatile store backed by a `HashMap`. Nothing outlives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let mut store = MemoryStore::new();
        store.set_item("k", "first").unwrap();
        store.set_item("k", "second").unwrap();

        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let mut store = MemoryStore::new();
        assert!(store.remove_item("missing").is_ok());
        assert!(store.is_empty());
    }
}
