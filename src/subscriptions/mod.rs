//! Change notifications for the storefront stores.
//!
//! Every store mutation broadcasts a [`StoreEvent`] naming the collection
//! that changed, so a presentation layer can re-render without polling.
//! Buffers are bounded; a subscriber that stops draining is dropped instead
//! of stalling the store.
//!
//! # Example
//!
//! ```ignore
//! let handle = storefront.subscribe(SubscriptionConfig {
//!     filter: SubscriptionFilter::keys(vec![StorageKey::Cart]),
//!     ..Default::default()
//! });
//!
//! storefront.cart_mut().add_one(&product);
//!
//! for event in handle.drain() {
//!     if let StoreEvent::CollectionChanged { key, len } = event {
//!         println!("{key} now has {len} lines");
//!     }
//! }
//! ```

mod manager;
mod types;

pub use manager::SubscriptionManager;
pub use types::{
    DropReason, StoreEvent, SubscriptionConfig, SubscriptionFilter, SubscriptionHandle,
    SubscriptionId,
};
