//! Storefront domain types and logic for Vitrina.
//!
//! This crate holds the state layer of the demo storefront:
//!
//! - **Catalog**: the static product list and category names
//! - **Cart**: line items with derived totals, volatile by design
//! - **Favorites**: a persisted set of product snapshots
//! - **Checkout**: the multi-step form state machine
//! - **Search**: the filter/sort pipeline over the catalog
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrina_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! for product in catalog::products() {
//!     cart.add(product);
//! }
//! println!("Total: {}", cart.total_price().display());
//! ```

pub mod error;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod favorites;
pub mod search;

pub use error::CommerceError;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{self, Product, Rating};

    // Cart
    pub use crate::cart::{Cart, CartItem};

    // Favorites
    pub use crate::favorites::{Favorites, FAVORITES_STORAGE_KEY};

    // Checkout
    pub use crate::checkout::{
        CheckoutField, CheckoutFlow, CheckoutForm, CheckoutState, OrderConfirmation,
    };

    // Search
    pub use crate::search::{
        search_products, CachedSearch, CategoryFilter, FilterCriteria, SortOrder,
    };
}
