//! Product catalog module.
//!
//! The catalog is static: products are never created or destroyed at
//! runtime, only read.

mod data;
mod product;

pub use data::{categories, find_product, products};
pub use product::{Product, Rating};
