//! Storefront application state for Vitrina.
//!
//! This crate composes the domain stores from `vitrina-commerce` into the
//! top-level application: which screen is visible, the mocked asynchronous
//! catalog client, the notification queue, the theme preference and the
//! stats dashboard derivations. Rendering is a collaborator, not a
//! concern: a UI shell reads this state and calls the mutation methods in
//! response to user events.

pub mod app;
pub mod client;
pub mod notify;
pub mod stats;
pub mod theme;
pub mod view;

pub use app::{CatalogState, Storefront, CATALOG_LOAD_ERROR, PAYMENT_SUCCESS_MESSAGE};
pub use client::{CatalogClient, FetchError};
pub use notify::{Notice, NoticeKind, NoticeQueue};
pub use stats::{category_breakdown, most_popular_category, CatalogStats};
pub use theme::{Theme, ThemePreference, THEME_STORAGE_KEY};
pub use view::{View, ViewMode};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::app::{CatalogState, Storefront};
    pub use crate::client::{CatalogClient, FetchError};
    pub use crate::notify::{Notice, NoticeKind, NoticeQueue};
    pub use crate::stats::CatalogStats;
    pub use crate::theme::{Theme, ThemePreference};
    pub use crate::view::{View, ViewMode};
}
