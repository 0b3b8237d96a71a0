//! Product types.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Aggregated customer rating for a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, 0 to 5.
    pub rate: f64,
    /// Number of reviews behind the average.
    pub count: u32,
}

/// A product in the catalog.
///
/// Immutable; sourced entirely from the static catalog data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: u32,
    /// Product title.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Full description.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Image URI.
    pub image: String,
    /// Customer rating summary.
    pub rating: Rating,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serde_roundtrip() {
        let product = Product {
            id: 1,
            title: "Camiseta Premium Algodón".to_string(),
            price: Money::new(2999),
            description: "Camiseta 100% algodón orgánico.".to_string(),
            category: "men's clothing".to_string(),
            image: "https://example.com/shirt.jpg".to_string(),
            rating: Rating {
                rate: 4.5,
                count: 156,
            },
        };

        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
