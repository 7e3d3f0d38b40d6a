//! Persistent local storage
//!
//! A small string key-value store that survives between invocations, playing
//! the role a browser's `localStorage` plays for a web client. The session
//! manager is the only component that touches it.

#[cfg(test)]
mod memory;
mod sqlite;

#[cfg(test)]
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::StorageError;

/// String key-value storage with `localStorage`-style semantics.
///
/// Setting a key overwrites any prior value; removing a missing key is not an
/// error.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` if present
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}
