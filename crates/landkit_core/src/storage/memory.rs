//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{SlotStorage, StorageResult};

/// A `HashMap`-backed storage, used by tests and in-process previews.
///
/// Interior mutability via `RwLock` so a single instance can be shared
/// behind an `Arc` between a writing store and reading contexts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().expect("storage lock poisoned").len()
    }

    /// Whether the storage holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SlotStorage for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.read().expect("storage lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().expect("storage lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().expect("storage lock poisoned");
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_absent_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("missing").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let storage = MemoryStorage::new();
        storage.write("k", "v1").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("v1"));

        // Unconditional overwrite.
        storage.write("k", "v2").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_remove() {
        let storage = MemoryStorage::new();
        storage.write("k", "v").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.read("k").unwrap(), None);
        assert!(storage.is_empty());

        // Removing an absent key is fine.
        storage.remove("k").unwrap();
    }
}
