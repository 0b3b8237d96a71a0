//! Filter criteria types.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Sort order for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    /// Keep catalog order.
    #[default]
    Unsorted,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
}

impl SortOrder {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::Unsorted => "Sin ordenar",
            SortOrder::PriceAsc => "Precio: Menor a Mayor",
            SortOrder::PriceDesc => "Precio: Mayor a Menor",
        }
    }
}

/// Category selection: everything, or a single named category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only products whose category equals the given label.
    Named(String),
}

impl CategoryFilter {
    /// Check whether a product category passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }
}

/// The inputs to the filter/sort pipeline.
///
/// Transient view state: the pipeline output is derivable purely from a
/// criteria value plus the catalog, with no hidden state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text search, matched case-insensitively across title,
    /// description and category. Blank disables the search predicate.
    pub search: String,
    /// Category selection.
    pub category: CategoryFilter,
    /// Inclusive lower price bound.
    pub price_min: Money,
    /// Inclusive upper price bound.
    pub price_max: Money,
    /// Minimum average rating; 0 disables the rating predicate.
    pub min_rating: f64,
    /// Sort order, applied after filtering.
    pub sort: SortOrder,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        // The upper bound is reseeded to the catalog maximum once the
        // catalog loads; this is only the pre-load placeholder.
        Self::up_to(Money::from_decimal(3000.0))
    }
}

impl FilterCriteria {
    /// Criteria matching everything priced between zero and `price_max`.
    pub fn up_to(price_max: Money) -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            price_min: Money::zero(),
            price_max,
            min_rating: 0.0,
            sort: SortOrder::Unsorted,
        }
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restrict to a single category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = CategoryFilter::Named(category.into());
        self
    }

    /// Set the price bounds.
    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    /// Set the minimum rating threshold.
    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// The price bounds in normalized order.
    ///
    /// The UI keeps the sliders ordered, but rapid interaction can slip an
    /// inverted pair through; the pipeline swaps the bounds rather than
    /// panic or return nothing.
    pub fn price_bounds(&self) -> (Money, Money) {
        if self.price_min > self.price_max {
            (self.price_max, self.price_min)
        } else {
            (self.price_min, self.price_max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter_matches() {
        assert!(CategoryFilter::All.matches("electronics"));
        assert!(CategoryFilter::Named("electronics".to_string()).matches("electronics"));
        assert!(!CategoryFilter::Named("electronics".to_string()).matches("men's clothing"));
    }

    #[test]
    fn test_inverted_bounds_are_swapped() {
        let criteria =
            FilterCriteria::default().with_price_range(Money::new(5000), Money::new(1000));
        assert_eq!(
            criteria.price_bounds(),
            (Money::new(1000), Money::new(5000))
        );
    }

    #[test]
    fn test_ordered_bounds_untouched() {
        let criteria =
            FilterCriteria::default().with_price_range(Money::new(1000), Money::new(5000));
        assert_eq!(
            criteria.price_bounds(),
            (Money::new(1000), Money::new(5000))
        );
    }
}
