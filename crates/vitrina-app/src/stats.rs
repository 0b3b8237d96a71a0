//! Stats dashboard derivations.
//!
//! Pure functions recomputed from current state on demand; nothing here is
//! cached.

use std::collections::BTreeMap;

use vitrina_commerce::cart::Cart;
use vitrina_commerce::catalog::Product;
use vitrina_commerce::money::Money;

/// Price statistics over the loaded catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogStats {
    /// Number of products available.
    pub total_products: usize,
    /// Mean price, rounded to the nearest cent.
    pub average_price: Money,
    /// Highest price in the catalog.
    pub highest_price: Money,
    /// Lowest price in the catalog.
    pub lowest_price: Money,
}

impl CatalogStats {
    /// Compute stats over `products`. An empty slice yields all zeros.
    pub fn compute(products: &[Product]) -> Self {
        if products.is_empty() {
            return Self::default();
        }

        let total = Money::sum(products.iter().map(|p| &p.price));
        let average = (total.cents as f64 / products.len() as f64).round() as i64;
        let highest = products.iter().map(|p| p.price).max().unwrap_or_default();
        let lowest = products.iter().map(|p| p.price).min().unwrap_or_default();

        Self {
            total_products: products.len(),
            average_price: Money::new(average),
            highest_price: highest,
            lowest_price: lowest,
        }
    }
}

/// Quantity of cart items per category.
pub fn category_breakdown(cart: &Cart) -> BTreeMap<String, i64> {
    let mut breakdown = BTreeMap::new();
    for item in cart.items() {
        *breakdown.entry(item.product.category.clone()).or_insert(0) += item.quantity;
    }
    breakdown
}

/// The category with the most items in the cart, with its quantity.
///
/// Ties resolve to the lexicographically first category, which keeps the
/// answer deterministic.
pub fn most_popular_category(cart: &Cart) -> Option<(String, i64)> {
    category_breakdown(cart)
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
}
