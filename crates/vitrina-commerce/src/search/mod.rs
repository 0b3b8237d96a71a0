//! Search module.
//!
//! The filter/sort pipeline that derives the visible product listing from
//! the catalog and the current criteria.

mod criteria;
mod pipeline;

pub use criteria::{CategoryFilter, FilterCriteria, SortOrder};
pub use pipeline::{search_products, CachedSearch};
