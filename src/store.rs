//! Storefront tying the stores to one storage backend.

use crate::admin::{AdminConfig, AdminStore};
use crate::cart::CartStore;
use crate::checkout::{self, CheckoutConfig, CheckoutDetails};
use crate::error::Result;
use crate::state::StoreContext;
use crate::storage::{DocumentEncoding, FileStorage, KeyValueStorage, MemoryStorage};
use crate::subscriptions::{
    SubscriptionConfig, SubscriptionHandle, SubscriptionId, SubscriptionManager,
};
use crate::types::Order;
use crate::wishlist::WishlistStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Where documents are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// One framed file per key under `StoreConfig::path`.
    #[default]
    File,
    /// Process memory; nothing survives the `Storefront`.
    Memory,
}

/// Store configuration.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Base path for file storage.
    pub path: PathBuf,

    pub backend: StorageBackend,

    /// Whether to create the storage directory if it doesn't exist.
    pub create_if_missing: bool,

    /// Document read cache size (number of documents).
    pub cache_size: usize,

    pub encoding: DocumentEncoding,

    pub admin: AdminConfig,

    pub checkout: CheckoutConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./grevia-store"),
            backend: StorageBackend::File,
            create_if_missing: true,
            cache_size: 16,
            encoding: DocumentEncoding::Json,
            admin: AdminConfig::default(),
            checkout: CheckoutConfig::default(),
        }
    }
}

/// The cart, wishlist and admin stores over one shared context.
///
/// All three see the same storage and publish to the same subscription
/// manager.
pub struct Storefront {
    config: StoreConfig,
    ctx: StoreContext,
    cart: CartStore,
    wishlist: WishlistStore,
    admin: AdminStore,
}

impl Storefront {
    /// Open the configured backend and load every store from it.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let storage: Arc<dyn KeyValueStorage> = match config.backend {
            StorageBackend::File => Arc::new(FileStorage::open(
                &config.path,
                config.cache_size,
                config.create_if_missing,
            )?),
            StorageBackend::Memory => Arc::new(MemoryStorage::new()),
        };

        tracing::info!(path = %config.path.display(), backend = ?config.backend, "opening storefront");
        let ctx = StoreContext::new(storage, Arc::new(SubscriptionManager::new()), config.encoding);
        Ok(Self::with_context(ctx, config))
    }

    /// Build the stores over an existing context.
    pub fn with_context(ctx: StoreContext, config: StoreConfig) -> Self {
        let cart = CartStore::open(ctx.clone());
        let wishlist = WishlistStore::open(ctx.clone());
        let admin = AdminStore::open(ctx.clone(), config.admin.clone());

        Self {
            config,
            ctx,
            cart,
            wishlist,
            admin,
        }
    }

    /// A storefront over fresh in-memory storage.
    pub fn in_memory() -> Self {
        let config = StoreConfig {
            backend: StorageBackend::Memory,
            ..Default::default()
        };
        Self::with_context(StoreContext::in_memory(), config)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn context(&self) -> &StoreContext {
        &self.ctx
    }

    // --- Stores ---

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    pub fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    pub fn wishlist_mut(&mut self) -> &mut WishlistStore {
        &mut self.wishlist
    }

    pub fn admin(&self) -> &AdminStore {
        &self.admin
    }

    pub fn admin_mut(&mut self) -> &mut AdminStore {
        &mut self.admin
    }

    // --- Subscriptions ---

    /// Subscribe to change events from all three stores.
    pub fn subscribe(&self, config: SubscriptionConfig) -> SubscriptionHandle {
        self.ctx.events().subscribe(config)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.ctx.events().unsubscribe(id);
    }

    // --- Checkout ---

    /// Place an order for the current cart using the configured pricing.
    pub fn checkout(&mut self, details: CheckoutDetails) -> Result<Order> {
        checkout::place_order(
            &mut self.cart,
            &mut self.admin,
            details,
            &self.config.checkout,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::storage::StorageKey;
    use crate::subscriptions::{StoreEvent, SubscriptionFilter};
    use tempfile::tempdir;

    #[test]
    fn test_in_memory_storefront() {
        let mut front = Storefront::in_memory();
        let product = catalog::product_by_id("mango-pickle").unwrap();

        front.cart_mut().add_one(&product);
        front.wishlist_mut().add_to_wishlist(&product);

        assert_eq!(front.cart().cart_count(), 1);
        assert!(front.wishlist().is_in_wishlist("mango-pickle"));
        assert_eq!(front.admin().products().len(), 9);
    }

    #[test]
    fn test_file_storefront_reopens() {
        let dir = tempdir().unwrap();
        let config = StoreConfig {
            path: dir.path().join("front"),
            ..Default::default()
        };

        {
            let mut front = Storefront::open(config.clone()).unwrap();
            front
                .cart_mut()
                .add_to_cart(&catalog::product_by_id("stevia-jar").unwrap(), 2);
            assert!(front.admin_mut().login("admin@grevia.com", "admin123"));
        }

        let front = Storefront::open(config).unwrap();
        assert_eq!(front.cart().cart_count(), 2);
        assert!(front.admin().is_authenticated());
    }

    #[test]
    fn test_subscribe_sees_cart_changes() {
        let mut front = Storefront::in_memory();
        let handle = front.subscribe(SubscriptionConfig {
            filter: SubscriptionFilter::keys(vec![StorageKey::Cart]),
            ..Default::default()
        });

        front
            .cart_mut()
            .add_one(&catalog::product_by_id("lime-pickle").unwrap());
        front
            .wishlist_mut()
            .add_to_wishlist(&catalog::product_by_id("lime-pickle").unwrap());

        let events = handle.drain();
        assert_eq!(
            events,
            vec![StoreEvent::CollectionChanged {
                key: StorageKey::Cart,
                len: 1
            }]
        );
    }
}
