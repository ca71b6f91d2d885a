//! In-memory storage backend.

use super::{KeyValueStorage, StorageKey};
use crate::error::{Result, StoreError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// Volatile storage, lost when dropped.
///
/// Writes can be switched to fail, which mimics a browser storage quota
/// being exhausted.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<StorageKey, Vec<u8>>>,
    reject_writes: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail (or succeed again).
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: StorageKey) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.read().get(&key).cloned())
    }

    fn set(&self, key: StorageKey, value: &[u8]) -> Result<()> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(StoreError::WriteRejected(format!("quota exceeded for {key}")));
        }
        self.entries.write().insert(key, value.to_vec());
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<()> {
        self.entries.write().remove(&key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries.write().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.get(StorageKey::Cart).unwrap().is_none());

        storage.set(StorageKey::Cart, b"[]").unwrap();
        assert_eq!(storage.get(StorageKey::Cart).unwrap().unwrap(), b"[]");

        storage.remove(StorageKey::Cart).unwrap();
        assert!(storage.get(StorageKey::Cart).unwrap().is_none());
        // Removing again is fine
        storage.remove(StorageKey::Cart).unwrap();
    }

    #[test]
    fn test_rejected_writes_keep_old_value() {
        let storage = MemoryStorage::new();
        storage.set(StorageKey::Wishlist, b"[1]").unwrap();

        storage.set_reject_writes(true);
        assert!(matches!(
            storage.set(StorageKey::Wishlist, b"[2]"),
            Err(StoreError::WriteRejected(_))
        ));
        assert_eq!(storage.get(StorageKey::Wishlist).unwrap().unwrap(), b"[1]");
    }

    #[test]
    fn test_clear() {
        let storage = MemoryStorage::new();
        storage.set(StorageKey::Orders, b"[]").unwrap();
        storage.set(StorageKey::Users, b"[]").unwrap();
        assert_eq!(storage.len(), 2);

        storage.clear().unwrap();
        assert!(storage.is_empty());
    }
}
