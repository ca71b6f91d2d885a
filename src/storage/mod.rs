//! Durable key-value storage for store documents.
//!
//! Every collection lives under its own [`StorageKey`] as one encoded
//! document. Writes always replace the whole document; there is no
//! incremental format. Backends only move bytes; encoding is handled by
//! [`DocumentEncoding`].

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of one persisted document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageKey {
    AdminSession,
    Products,
    Orders,
    Users,
    Categories,
    HomepageSections,
    Benefits,
    Cart,
    Wishlist,
}

impl StorageKey {
    pub const ALL: [StorageKey; 9] = [
        StorageKey::AdminSession,
        StorageKey::Products,
        StorageKey::Orders,
        StorageKey::Users,
        StorageKey::Categories,
        StorageKey::HomepageSections,
        StorageKey::Benefits,
        StorageKey::Cart,
        StorageKey::Wishlist,
    ];

    /// The key name as written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::AdminSession => "grevia-admin-user",
            StorageKey::Products => "grevia-admin-products",
            StorageKey::Orders => "grevia-admin-orders",
            StorageKey::Users => "grevia-admin-users",
            StorageKey::Categories => "grevia-admin-categories",
            StorageKey::HomepageSections => "grevia-admin-homepage",
            StorageKey::Benefits => "grevia-admin-benefits",
            StorageKey::Cart => "grevia-cart",
            StorageKey::Wishlist => "grevia-wishlist",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte-level key-value backend.
///
/// Implementations must tolerate being shared across stores. A missing key
/// is `Ok(None)`, not an error.
pub trait KeyValueStorage: Send + Sync {
    /// Read the document stored under `key`.
    fn get(&self, key: StorageKey) -> Result<Option<Vec<u8>>>;

    /// Replace the document stored under `key`.
    fn set(&self, key: StorageKey, value: &[u8]) -> Result<()>;

    /// Remove the document under `key`. Removing a missing key succeeds.
    fn remove(&self, key: StorageKey) -> Result<()>;

    /// Remove every document.
    fn clear(&self) -> Result<()>;
}

/// How documents are encoded before they reach the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DocumentEncoding {
    /// JSON, the format the storefront has always written.
    #[default]
    Json,
    /// MessagePack with named fields.
    MessagePack,
}

impl DocumentEncoding {
    pub fn encode<T: Serialize + ?Sized>(self, value: &T) -> Result<Vec<u8>> {
        match self {
            DocumentEncoding::Json => Ok(serde_json::to_vec(value)?),
            DocumentEncoding::MessagePack => Ok(rmp_serde::to_vec_named(value)?),
        }
    }

    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T> {
        match self {
            DocumentEncoding::Json => Ok(serde_json::from_slice(bytes)?),
            DocumentEncoding::MessagePack => Ok(rmp_serde::from_slice(bytes)?),
        }
    }
}
