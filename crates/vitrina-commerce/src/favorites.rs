//! Persisted favorites store.
//!
//! Favorites keep the full product snapshot, not just the id, and the whole
//! collection is written back to storage on every mutation.

use tracing::warn;
use vitrina_storage::Store;

use crate::catalog::Product;
use crate::error::CommerceError;

/// Storage key holding the serialized favorites collection.
pub const FAVORITES_STORAGE_KEY: &str = "ecommerce_favorites";

/// The favorites list, backed by a key-value [`Store`].
///
/// The store is injected at construction; there is no ambient lookup and no
/// late "used outside a provider" failure.
#[derive(Debug)]
pub struct Favorites {
    items: Vec<Product>,
    store: Store,
}

impl Favorites {
    /// Load the favorites collection from the given store.
    ///
    /// An absent key yields an empty list. Corrupt persisted data also
    /// yields an empty list: favorites are non-critical convenience state,
    /// so unreadable data fails closed instead of surfacing a parse error.
    pub fn load(store: Store) -> Self {
        let items = match store.get::<Vec<Product>>(FAVORITES_STORAGE_KEY) {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(key = FAVORITES_STORAGE_KEY, %err, "discarding unreadable favorites data");
                Vec::new()
            }
        };
        Self { items, store }
    }

    /// Add a product to the favorites.
    ///
    /// Set semantics: adding an id that is already present is a no-op, and
    /// the stored snapshot is the first one written.
    pub fn add(&mut self, product: Product) -> Result<(), CommerceError> {
        if self.is_favorite(product.id) {
            return Ok(());
        }
        self.items.push(product);
        self.persist()
    }

    /// Remove a product from the favorites. Unknown ids are a no-op.
    pub fn remove(&mut self, product_id: u32) -> Result<(), CommerceError> {
        let len_before = self.items.len();
        self.items.retain(|p| p.id != product_id);
        if self.items.len() == len_before {
            return Ok(());
        }
        self.persist()
    }

    /// Check whether a product id is in the favorites.
    pub fn is_favorite(&self, product_id: u32) -> bool {
        self.items.iter().any(|p| p.id == product_id)
    }

    /// The favorite products, in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no favorites.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&mut self) -> Result<(), CommerceError> {
        self.store.set(FAVORITES_STORAGE_KEY, &self.items)?;
        Ok(())
    }
}
