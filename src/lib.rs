//! # Grevia Store
//!
//! Client-side state for the Grevia storefront: the shopper's cart and
//! wishlist, and the admin back office, all persisted to a local key-value
//! store.
//!
//! ## Core Concepts
//!
//! - **Stores**: `CartStore`, `WishlistStore` and `AdminStore`, each holding
//!   copy-on-write collections that write through on every change
//! - **Storage**: a `KeyValueStorage` backend, file or in-memory, holding one
//!   document per key
//! - **Context**: a `StoreContext` passed explicitly to every store
//! - **Events**: subscribers are told which collection changed
//!
//! ## Example
//!
//! ```ignore
//! use grevia_store::{catalog, Storefront, StoreConfig};
//!
//! let mut front = Storefront::open(StoreConfig {
//!     path: "./grevia-data".into(),
//!     ..Default::default()
//! })?;
//!
//! let jar = catalog::product_by_id("stevia-jar").unwrap();
//! front.cart_mut().add_to_cart(&jar, 2);
//! assert_eq!(front.cart().cart_total(), 998);
//!
//! front.admin_mut().login("admin@grevia.com", "admin123");
//! let stats = front.admin().stats();
//! ```

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod state;
pub mod storage;
pub mod store;
pub mod subscriptions;
pub mod types;
pub mod wishlist;

// Re-exports
pub use admin::{
    AdminConfig, AdminStats, AdminStore, AdminUser, Benefit, BenefitDraft, BenefitIcon,
    BenefitPatch, Category, CategoryDraft, CategoryPatch, HomepageSection, HomepageSectionPatch,
    OrderTransitionPolicy, ProductDraft, ProductPatch, User, UserStatus,
};
pub use cart::CartStore;
pub use checkout::{place_order, CheckoutConfig, CheckoutDetails, OrderTotals};
pub use error::{Result, StoreError};
pub use state::{PersistedCollection, StoreContext};
pub use storage::{DocumentEncoding, FileStorage, KeyValueStorage, MemoryStorage, StorageKey};
pub use store::{StorageBackend, StoreConfig, Storefront};
pub use subscriptions::{
    DropReason, StoreEvent, SubscriptionConfig, SubscriptionFilter, SubscriptionHandle,
    SubscriptionId, SubscriptionManager,
};
pub use types::*;
pub use wishlist::WishlistStore;
