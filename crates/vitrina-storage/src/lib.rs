//! Durable local key-value storage for Vitrina.
//!
//! The storefront keeps a handful of values (the favorites collection, the
//! theme preference) in a small local key-value store, overwritten wholesale
//! on each mutation and human-inspectable on disk.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrina_storage::Store;
//!
//! let mut store = Store::on_disk("./data");
//!
//! // Store a value
//! store.set("ecommerce_favorites", &favorites)?;
//!
//! // Retrieve a value
//! let favorites: Option<Vec<Product>> = store.get("ecommerce_favorites")?;
//!
//! // Delete a value
//! store.delete("ecommerce_favorites")?;
//! ```

mod backend;
mod error;
mod kv;

pub use backend::{Backend, FileBackend, MemoryBackend};
pub use error::StorageError;
pub use kv::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Backend, FileBackend, MemoryBackend, StorageError, Store};
}
