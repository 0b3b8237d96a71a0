//! Top-level application state.
//!
//! One `Storefront` per session. All mutation happens here, in response to
//! discrete user events or the completion of a pending asynchronous
//! operation; the UI shell only reads.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info, warn};

use vitrina_commerce::cart::Cart;
use vitrina_commerce::catalog::Product;
use vitrina_commerce::checkout::{CheckoutFlow, OrderConfirmation};
use vitrina_commerce::error::CommerceError;
use vitrina_commerce::favorites::Favorites;
use vitrina_commerce::money::Money;
use vitrina_commerce::search::{CachedSearch, CategoryFilter, FilterCriteria, SortOrder};
use vitrina_storage::Store;

use crate::client::{CatalogClient, FetchError};
use crate::notify::{NoticeKind, NoticeQueue};
use crate::stats::CatalogStats;
use crate::theme::{Theme, ThemePreference};
use crate::view::{View, ViewMode};

/// Banner shown in place of the listing when the catalog fails to load.
pub const CATALOG_LOAD_ERROR: &str = "Error al cargar los productos";
/// Toast shown when the simulated payment settles.
pub const PAYMENT_SUCCESS_MESSAGE: &str = "¡Pago procesado exitosamente! 🎉";
/// Toast shown when a product lands in the cart.
pub const CART_ADDED_MESSAGE: &str = "Producto añadido al carrito 🛒";
/// Toast shown when a product is added to favorites.
pub const FAVORITE_ADDED_MESSAGE: &str = "Producto añadido a favoritos ❤️";
/// Toast shown when a product leaves the favorites.
pub const FAVORITE_REMOVED_MESSAGE: &str = "Producto eliminado de favoritos";

/// How long the simulated payment takes to settle.
pub const SETTLE_DELAY: Duration = Duration::from_secs(2);
/// How long the completed-checkout screen stays up before the UI returns
/// to the shop.
pub const COMPLETE_RETURN_DELAY: Duration = Duration::from_secs(3);

/// Lifecycle of the catalog data.
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    /// Fetch in flight (or not started).
    #[default]
    Loading,
    /// Catalog available.
    Ready {
        products: Vec<Product>,
        categories: Vec<String>,
    },
    /// Fetch failed; the message replaces the listing. No automatic retry.
    Failed(String),
}

impl CatalogState {
    /// The loaded products, if any.
    pub fn products(&self) -> &[Product] {
        match self {
            CatalogState::Ready { products, .. } => products,
            _ => &[],
        }
    }

    /// The loaded category names, if any.
    pub fn categories(&self) -> &[String] {
        match self {
            CatalogState::Ready { categories, .. } => categories,
            _ => &[],
        }
    }
}

/// The whole storefront: stores, view state and async orchestration.
#[derive(Debug)]
pub struct Storefront {
    client: CatalogClient,
    settle_delay: Duration,
    view: View,
    view_mode: ViewMode,
    catalog: CatalogState,
    load_epoch: u64,
    criteria: FilterCriteria,
    listing: CachedSearch,
    selected: Option<Product>,
    cart: Cart,
    favorites: Favorites,
    theme: ThemePreference,
    notices: NoticeQueue,
    checkout: Option<CheckoutFlow>,
}

impl Storefront {
    /// Build a storefront over the two injected stores.
    ///
    /// The stores must exist before the storefront does; there is no
    /// ambient lookup that can fail later.
    pub fn new(favorites_store: Store, theme_store: Store) -> Self {
        Self {
            client: CatalogClient::new(),
            settle_delay: SETTLE_DELAY,
            view: View::default(),
            view_mode: ViewMode::default(),
            catalog: CatalogState::default(),
            load_epoch: 0,
            criteria: FilterCriteria::default(),
            listing: CachedSearch::new(),
            selected: None,
            cart: Cart::new(),
            favorites: Favorites::load(favorites_store),
            theme: ThemePreference::load(theme_store),
            notices: NoticeQueue::new(),
            checkout: None,
        }
    }

    /// Replace the catalog client (tests use an instant one).
    pub fn with_client(mut self, client: CatalogClient) -> Self {
        self.client = client;
        self
    }

    /// Replace the settle delay (tests use zero).
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    // --- catalog loading -------------------------------------------------

    /// Mark a catalog load as started and return its epoch.
    ///
    /// The epoch ties a later [`Storefront::apply_catalog`] back to this
    /// load; a completion whose epoch is no longer current is dropped, so
    /// a fetch that outlives its screen can never corrupt newer state.
    pub fn begin_catalog_load(&mut self) -> u64 {
        self.load_epoch += 1;
        self.catalog = CatalogState::Loading;
        self.load_epoch
    }

    /// Apply the outcome of the catalog load started at `epoch`.
    pub fn apply_catalog(
        &mut self,
        epoch: u64,
        result: Result<(Vec<Product>, Vec<String>), FetchError>,
    ) {
        if epoch != self.load_epoch {
            debug!(epoch, current = self.load_epoch, "dropping stale catalog load");
            return;
        }
        match result {
            Ok((products, categories)) => {
                let max_price = products.iter().map(|p| p.price).max().unwrap_or_default();
                self.criteria.price_min = Money::zero();
                self.criteria.price_max = max_price;
                self.listing.invalidate();
                info!(products = products.len(), "catalog ready");
                self.catalog = CatalogState::Ready {
                    products,
                    categories,
                };
            }
            Err(err) => {
                warn!(%err, "catalog load failed");
                self.catalog = CatalogState::Failed(CATALOG_LOAD_ERROR.to_string());
            }
        }
    }

    /// Fetch products and categories concurrently and apply the result.
    pub async fn load_catalog(&mut self) {
        let epoch = self.begin_catalog_load();
        let (products, categories) = tokio::join!(
            self.client.fetch_products(),
            self.client.fetch_categories()
        );
        let result = products.and_then(|p| categories.map(|c| (p, c)));
        self.apply_catalog(epoch, result);
    }

    /// The catalog lifecycle state.
    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    // --- view state ------------------------------------------------------

    /// The visible screen.
    pub fn view(&self) -> View {
        self.view
    }

    /// Switch screens.
    pub fn navigate(&mut self, view: View) {
        self.view = view;
    }

    /// The listing layout.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Switch the listing layout.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Set the active search query.
    ///
    /// Searching always lands on the home screen, wherever it was typed.
    pub fn search(&mut self, query: impl Into<String>) {
        self.criteria.search = query.into();
        if self.view != View::Home {
            self.view = View::Home;
        }
    }

    /// The product opened in the detail panel, if any.
    pub fn selected_product(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    /// Open a product's detail panel.
    pub fn select_product(&mut self, product: Product) {
        self.selected = Some(product);
    }

    /// Close the detail panel.
    pub fn clear_selected_product(&mut self) {
        self.selected = None;
    }

    // --- filtering -------------------------------------------------------

    /// The current filter criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Restrict the listing to one category, or all of them.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.criteria.category = category;
    }

    /// Set the price bounds.
    pub fn set_price_range(&mut self, min: Money, max: Money) {
        self.criteria.price_min = min;
        self.criteria.price_max = max;
    }

    /// Set the minimum rating threshold.
    pub fn set_min_rating(&mut self, min_rating: f64) {
        self.criteria.min_rating = min_rating;
    }

    /// Set the sort order.
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.criteria.sort = sort;
    }

    /// The filtered, ordered listing for the current criteria.
    ///
    /// Memoized: repeated reads with unchanged criteria reuse the last
    /// derivation.
    pub fn listing(&mut self) -> &[Product] {
        match &self.catalog {
            CatalogState::Ready { products, .. } => self.listing.results(products, &self.criteria),
            _ => &[],
        }
    }

    // --- cart ------------------------------------------------------------

    /// The cart, for reads.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add a product to the cart and toast about it.
    pub fn add_to_cart(&mut self, product: Product) {
        self.cart.add(product);
        self.notices.push(CART_ADDED_MESSAGE, NoticeKind::Success);
    }

    /// Set a cart line's quantity (zero or less removes it).
    pub fn update_cart_quantity(&mut self, product_id: u32, quantity: i64) {
        self.cart.update_quantity(product_id, quantity);
    }

    /// Remove a cart line.
    pub fn remove_from_cart(&mut self, product_id: u32) {
        self.cart.remove(product_id);
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // --- favorites -------------------------------------------------------

    /// The favorites store, for reads.
    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Add or remove a product from the favorites, toasting either way.
    pub fn toggle_favorite(&mut self, product: Product) -> Result<(), CommerceError> {
        if self.favorites.is_favorite(product.id) {
            self.favorites.remove(product.id)?;
            self.notices.push(FAVORITE_REMOVED_MESSAGE, NoticeKind::Info);
        } else {
            self.favorites.add(product)?;
            self.notices.push(FAVORITE_ADDED_MESSAGE, NoticeKind::Success);
        }
        Ok(())
    }

    // --- theme -----------------------------------------------------------

    /// The current theme.
    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// Flip the theme, persisting the choice.
    pub fn toggle_theme(&mut self) -> Result<Theme, vitrina_storage::StorageError> {
        self.theme.toggle()
    }

    // --- notifications ---------------------------------------------------

    /// The notification queue, for reads.
    pub fn notices(&self) -> &NoticeQueue {
        &self.notices
    }

    /// Append a notification.
    pub fn push_notice(&mut self, message: impl Into<String>, kind: NoticeKind) -> u64 {
        self.notices.push(message, kind)
    }

    /// Dismiss a notification by id.
    pub fn dismiss_notice(&mut self, id: u64) {
        self.notices.dismiss(id);
    }

    /// Drop notifications whose display time is up.
    pub fn sweep_notices(&mut self) {
        self.notices.sweep();
    }

    // --- checkout --------------------------------------------------------

    /// Start a checkout over the current cart.
    pub fn begin_checkout(&mut self) {
        self.checkout = Some(CheckoutFlow::new());
    }

    /// The active checkout, if any.
    pub fn checkout(&self) -> Option<&CheckoutFlow> {
        self.checkout.as_ref()
    }

    /// The active checkout, for field edits and step transitions.
    pub fn checkout_mut(&mut self) -> Option<&mut CheckoutFlow> {
        self.checkout.as_mut()
    }

    /// Abandon the checkout and return to the cart.
    ///
    /// Rejected while the settle is in flight; submitting is not
    /// cancellable.
    pub fn cancel_checkout(&mut self) -> Result<(), CommerceError> {
        if let Some(flow) = &self.checkout {
            if flow.is_submitting() {
                return Err(CommerceError::InvalidTransition {
                    from: "submitting",
                    to: "cancelled",
                });
            }
        }
        self.checkout = None;
        Ok(())
    }

    /// Submit the order from the review step.
    ///
    /// Drives `Review → Submitting`, waits out the simulated settle, then
    /// clears the cart, toasts the success message and lands on
    /// `Complete`. The settle always succeeds; there is no failure path to
    /// model.
    pub async fn submit_order(&mut self) -> Result<OrderConfirmation, CommerceError> {
        let flow = self
            .checkout
            .as_mut()
            .ok_or(CommerceError::InvalidTransition {
                from: "no checkout",
                to: "submitting",
            })?;
        flow.begin_submit()?;
        let total = self.cart.total_price();

        sleep(self.settle_delay).await;

        // Re-borrow after the await; a submitting checkout cannot be
        // cancelled, so the flow is still here.
        let flow = self
            .checkout
            .as_mut()
            .ok_or(CommerceError::InvalidTransition {
                from: "no checkout",
                to: "complete",
            })?;
        let confirmation = flow.complete_submit(total)?;
        self.cart.clear();
        self.notices
            .push(PAYMENT_SUCCESS_MESSAGE, NoticeKind::Success);
        info!(order = %confirmation.order_number, total = %confirmation.total, "payment settled");
        Ok(confirmation)
    }

    /// Leave a completed checkout and return to the shop.
    ///
    /// The UI calls this after showing the confirmation screen for
    /// [`COMPLETE_RETURN_DELAY`]. A no-op unless the checkout is complete.
    pub fn finish_checkout(&mut self) {
        if self.checkout.as_ref().is_some_and(|f| f.is_complete()) {
            self.checkout = None;
            self.view = View::Home;
        }
    }

    // --- stats -----------------------------------------------------------

    /// Price statistics over the loaded catalog.
    pub fn catalog_stats(&self) -> CatalogStats {
        CatalogStats::compute(self.catalog.products())
    }
}
