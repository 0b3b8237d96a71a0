//! The filter/sort pipeline.
//!
//! A pure derivation: `(catalog, criteria) -> ordered product list`. Every
//! active predicate must hold simultaneously; the price sort runs last as a
//! stable comparator so ties keep catalog order.

use std::cmp::Reverse;

use crate::catalog::Product;
use crate::search::criteria::{FilterCriteria, SortOrder};

/// Run the pipeline over `catalog` with the given criteria.
pub fn search_products(catalog: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let needle = criteria.search.trim().to_lowercase();
    let (price_min, price_max) = criteria.price_bounds();

    let mut results: Vec<Product> = catalog
        .iter()
        .filter(|p| {
            (needle.is_empty() || matches_search(p, &needle))
                && criteria.category.matches(&p.category)
                && p.price >= price_min
                && p.price <= price_max
                && (criteria.min_rating <= 0.0 || p.rating.rate >= criteria.min_rating)
        })
        .cloned()
        .collect();

    match criteria.sort {
        SortOrder::Unsorted => {}
        SortOrder::PriceAsc => results.sort_by_key(|p| p.price),
        SortOrder::PriceDesc => results.sort_by_key(|p| Reverse(p.price)),
    }

    results
}

/// Case-insensitive substring match across title, description and category.
/// `needle` must already be lowercased.
fn matches_search(product: &Product, needle: &str) -> bool {
    product.title.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

/// Memo of the last pipeline run, keyed on the exact criteria value.
///
/// Identical criteria never recompute; any change to the criteria misses
/// the memo and reruns the pipeline. The memo must be explicitly
/// invalidated when the catalog itself is replaced, so it can never serve
/// stale results.
#[derive(Debug, Default)]
pub struct CachedSearch {
    key: Option<FilterCriteria>,
    results: Vec<Product>,
}

impl CachedSearch {
    /// Create an empty memo.
    pub fn new() -> Self {
        Self::default()
    }

    /// The listing for `criteria`, recomputing only on a key miss.
    pub fn results(&mut self, catalog: &[Product], criteria: &FilterCriteria) -> &[Product] {
        if self.key.as_ref() != Some(criteria) {
            self.results = search_products(catalog, criteria);
            self.key = Some(criteria.clone());
        }
        &self.results
    }

    /// Drop the memo. Call whenever the catalog changes.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.results.clear();
    }
}
