//! Shopping cart store.
//!
//! The cart is deliberately volatile: it lives in memory only and does not
//! survive a restart, unlike favorites.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A line item: a product snapshot paired with a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product being purchased.
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl CartItem {
    /// Price of this line (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }
}

/// A shopping cart.
///
/// Invariant: at most one line item per product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// If the product already has a line item its quantity is incremented
    /// by 1; otherwise a new line item with quantity 1 is inserted.
    pub fn add(&mut self, product: Product) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity += 1;
            return;
        }
        self.items.push(CartItem {
            product,
            quantity: 1,
        });
    }

    /// Set a line item's quantity.
    ///
    /// A quantity of zero or less removes the line item entirely. Unknown
    /// product ids are a no-op.
    pub fn update_quantity(&mut self, product_id: u32, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Remove a line item. Returns whether anything was removed.
    pub fn remove(&mut self, product_id: u32) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        self.items.len() < len_before
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get a line item by product id.
    pub fn get(&self, product_id: u32) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of unique line items.
    pub fn unique_items(&self) -> usize {
        self.items.len()
    }

    /// Total item count (sum of quantities). Recomputed on every read.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Total price (sum of line totals). Recomputed on every read.
    pub fn total_price(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, i| acc + i.line_total())
    }
}
