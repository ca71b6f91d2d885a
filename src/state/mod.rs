//! In-memory store state backed by durable documents.
//!
//! Each collection is held behind an `Arc` and replaced copy-on-write, so
//! a snapshot handed to a reader stays valid after later mutations. Every
//! mutation rewrites the full document for its key.

mod collection;
mod context;

pub use collection::PersistedCollection;
pub use context::StoreContext;
