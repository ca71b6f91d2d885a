//! Shared handle to storage and change notifications.

use crate::storage::{DocumentEncoding, KeyValueStorage, MemoryStorage, StorageKey};
use crate::subscriptions::SubscriptionManager;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Everything a store needs from its surroundings.
///
/// Cloning is cheap; all clones share one backend and one subscription
/// manager, so stores built from the same context see each other's writes.
#[derive(Clone)]
pub struct StoreContext {
    storage: Arc<dyn KeyValueStorage>,
    events: Arc<SubscriptionManager>,
    encoding: DocumentEncoding,
}

impl StoreContext {
    pub fn new(
        storage: Arc<dyn KeyValueStorage>,
        events: Arc<SubscriptionManager>,
        encoding: DocumentEncoding,
    ) -> Self {
        Self {
            storage,
            events,
            encoding,
        }
    }

    /// Context over fresh in-memory storage with JSON documents.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStorage::new()),
            Arc::new(SubscriptionManager::new()),
            DocumentEncoding::Json,
        )
    }

    pub fn storage(&self) -> &Arc<dyn KeyValueStorage> {
        &self.storage
    }

    pub fn events(&self) -> &Arc<SubscriptionManager> {
        &self.events
    }

    pub fn encoding(&self) -> DocumentEncoding {
        self.encoding
    }

    /// Read and decode the document under `key`.
    ///
    /// Missing, unreadable and malformed documents all come back as `None`.
    pub fn load<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        let bytes = match self.storage.get(key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::debug!(%key, "no persisted document");
                return None;
            }
            Err(e) => {
                tracing::warn!(%key, error = %e, "failed to read persisted document");
                return None;
            }
        };

        match self.encoding.decode(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%key, error = %e, "discarding malformed persisted document");
                None
            }
        }
    }

    /// Encode and write `value` under `key`.
    ///
    /// Failures are logged and swallowed; returns whether the write landed.
    pub fn save<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> bool {
        let bytes = match self.encoding.encode(value) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(%key, error = %e, "failed to encode document");
                return false;
            }
        };

        match self.storage.set(key, &bytes) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(%key, error = %e, "failed to persist document");
                false
            }
        }
    }

    /// Delete the document under `key`, logging failures.
    pub fn remove(&self, key: StorageKey) -> bool {
        match self.storage.remove(key) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(%key, error = %e, "failed to remove document");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_is_none() {
        let ctx = StoreContext::in_memory();
        let loaded: Option<Vec<u32>> = ctx.load(StorageKey::Cart);
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let ctx = StoreContext::in_memory();
        assert!(ctx.save(StorageKey::Cart, &vec![1u32, 2, 3]));
        let loaded: Option<Vec<u32>> = ctx.load(StorageKey::Cart);
        assert_eq!(loaded, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_malformed_is_none() {
        let ctx = StoreContext::in_memory();
        ctx.storage().set(StorageKey::Cart, b"][").unwrap();
        let loaded: Option<Vec<u32>> = ctx.load(StorageKey::Cart);
        assert!(loaded.is_none());
    }

    #[test]
    fn test_rejected_write_is_swallowed() {
        let memory = Arc::new(MemoryStorage::new());
        memory.set_reject_writes(true);
        let ctx = StoreContext::new(
            memory,
            Arc::new(SubscriptionManager::new()),
            DocumentEncoding::Json,
        );
        assert!(!ctx.save(StorageKey::Orders, &Vec::<u32>::new()));
    }
}
