//! Mocked catalog service.
//!
//! The demo has no backend: every fetch is a fixed delay over the static
//! catalog. The contract is asynchronous and fallible anyway (callers
//! already render an error banner on failure), so a real HTTP-backed
//! client can replace this one without touching them.

use std::time::Duration;

use thiserror::Error;
use tokio::time::sleep;
use tracing::debug;
use vitrina_commerce::catalog::{self, Product};

/// Delay applied to a product listing fetch.
pub const PRODUCTS_DELAY: Duration = Duration::from_millis(800);
/// Delay applied to a category list fetch.
pub const CATEGORIES_DELAY: Duration = Duration::from_millis(300);
/// Delay applied to a single product lookup.
pub const PRODUCT_DELAY: Duration = Duration::from_millis(500);

/// Error type for catalog fetches.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The catalog could not be loaded.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// No product with the requested id.
    #[error("Product not found: {0}")]
    NotFound(u32),
}

/// Asynchronous accessor over the static catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    products_delay: Duration,
    categories_delay: Duration,
    product_delay: Duration,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient {
    /// Client with the production delays.
    pub fn new() -> Self {
        Self {
            products_delay: PRODUCTS_DELAY,
            categories_delay: CATEGORIES_DELAY,
            product_delay: PRODUCT_DELAY,
        }
    }

    /// Client with zero delays, for tests.
    pub fn instant() -> Self {
        Self {
            products_delay: Duration::ZERO,
            categories_delay: Duration::ZERO,
            product_delay: Duration::ZERO,
        }
    }

    /// Fetch the full product list.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        sleep(self.products_delay).await;
        let products = catalog::products();
        debug!(count = products.len(), "fetched products");
        Ok(products)
    }

    /// Fetch the category names.
    pub async fn fetch_categories(&self) -> Result<Vec<String>, FetchError> {
        sleep(self.categories_delay).await;
        Ok(catalog::categories())
    }

    /// Fetch a single product by id.
    pub async fn fetch_product_by_id(&self, id: u32) -> Result<Product, FetchError> {
        sleep(self.product_delay).await;
        catalog::find_product(id)
            .cloned()
            .ok_or(FetchError::NotFound(id))
    }
}
