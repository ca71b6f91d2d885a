//! Wishlist store: a persisted set of saved products.

use crate::state::{PersistedCollection, StoreContext};
use crate::storage::StorageKey;
use crate::types::Product;
use std::collections::HashSet;
use std::sync::Arc;

/// Saved products, unique by id, in the order they were added.
pub struct WishlistStore {
    items: PersistedCollection<Product>,
}

impl WishlistStore {
    /// Load the wishlist from `ctx`, starting empty if nothing usable is stored.
    pub fn open(ctx: StoreContext) -> Self {
        let mut items: PersistedCollection<Product> =
            PersistedCollection::load_or_else(ctx, StorageKey::Wishlist, Vec::new);

        let mut seen = HashSet::new();
        if !items.iter().all(|p| seen.insert(p.id.clone())) {
            tracing::warn!("dropping duplicate persisted wishlist entries");
            let mut seen = HashSet::new();
            let deduped: Vec<Product> = items
                .iter()
                .filter(|p| seen.insert(p.id.clone()))
                .cloned()
                .collect();
            items.replace(deduped);
        }

        Self { items }
    }

    /// Save `product`. Already-saved products are left alone.
    pub fn add_to_wishlist(&mut self, product: &Product) {
        if self.is_in_wishlist(&product.id) {
            return;
        }
        self.items.mutate(|items| items.push(product.clone()));
    }

    /// Forget a product. An unknown id is ignored.
    pub fn remove_from_wishlist(&mut self, product_id: &str) {
        let Some(index) = self.items.iter().position(|p| p.id == product_id) else {
            return;
        };
        self.items.mutate(|items| {
            items.remove(index);
        });
    }

    /// Add if absent, remove if present. Returns whether it is now saved.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.is_in_wishlist(&product.id) {
            self.remove_from_wishlist(&product.id);
            false
        } else {
            self.add_to_wishlist(product);
            true
        }
    }

    pub fn is_in_wishlist(&self, product_id: &str) -> bool {
        self.items.iter().any(|p| p.id == product_id)
    }

    pub fn wishlist_count(&self) -> usize {
        self.items.len()
    }

    pub fn clear_wishlist(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.replace(Vec::new());
    }

    /// Snapshot of the saved products.
    pub fn items(&self) -> Arc<Vec<Product>> {
        self.items.snapshot()
    }
}
