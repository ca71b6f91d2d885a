//! Copy-on-write, write-through record collection.

use super::StoreContext;
use crate::storage::StorageKey;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// A list of records mirrored to one storage key.
///
/// Readers take [`snapshot`](Self::snapshot)s; a snapshot never changes.
/// Every [`mutate`](Self::mutate) writes the whole list back and notifies
/// subscribers.
pub struct PersistedCollection<T> {
    key: StorageKey,
    items: Arc<Vec<T>>,
    ctx: StoreContext,
}

impl<T> PersistedCollection<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    /// Load the collection, or build it with `fallback` when nothing usable
    /// is stored. A fallback value is written back immediately.
    pub fn load_or_else<F>(ctx: StoreContext, key: StorageKey, fallback: F) -> Self
    where
        F: FnOnce() -> Vec<T>,
    {
        let items = match ctx.load::<Vec<T>>(key) {
            Some(items) => items,
            None => {
                let items = fallback();
                ctx.save(key, &items);
                items
            }
        };

        tracing::debug!(%key, len = items.len(), "collection loaded");

        Self {
            key,
            items: Arc::new(items),
            ctx,
        }
    }

    pub fn key(&self) -> StorageKey {
        self.key
    }

    /// Cheap immutable view of the current records.
    pub fn snapshot(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.items)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Apply `f` to the records, then persist and broadcast.
    ///
    /// Outstanding snapshots keep the old contents.
    pub fn mutate<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Vec<T>) -> R,
    {
        let result = f(Arc::make_mut(&mut self.items));
        self.persist();
        result
    }

    /// Swap in an entirely new list.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = Arc::new(items);
        self.persist();
    }

    fn persist(&self) {
        self.ctx.save(self.key, self.items.as_slice());
        self.ctx
            .events()
            .broadcast_collection_changed(self.key, self.items.len());
    }
}
