//! Top-level view state.

/// The screens of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Product listing with filters.
    #[default]
    Home,
    /// Shopping cart (and the checkout it hosts).
    Cart,
    /// Favorites list.
    Favorites,
    /// Stats dashboard.
    Stats,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Cart => "cart",
            View::Favorites => "favorites",
            View::Stats => "stats",
        }
    }
}

/// Layout of the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(View::default(), View::Home);
        assert_eq!(ViewMode::default(), ViewMode::Grid);
    }
}
