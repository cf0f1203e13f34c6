use std::sync::Arc;

use tracing::{info, instrument, warn};

use fresh_bowl_core::{Cart, Currency, Decremented, Product, ProductId};

use super::{CartEvent, CartView, Mount, ProductCard, StorefrontView, UiError};
use crate::api::{ApiClient, ProductFilter};
use crate::error::Result;
use crate::state::AppState;
use crate::store::StateStore;

/// Drives the product grid and cart panel over a [`StorefrontView`].
///
/// Construction verifies every required mount point and restores the
/// persisted cart; [`CartController::init`] then fetches the catalog and
/// performs the first render. After that the controller reacts purely to
/// [`CartEvent`]s, persisting the cart before each re-render so a crash
/// between the two never loses a mutation.
pub struct CartController<V: StorefrontView> {
    api: ApiClient,
    store: Arc<dyn StateStore>,
    view: V,
    cart: Cart,
    products: Vec<Product>,
    currency: Currency,
    panel_open: bool,
}

impl<V: StorefrontView> CartController<V> {
    /// Bind the controller to a view and restore the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingMount`] if the view lacks any required
    /// mount point, or a store error if the persistence medium fails.
    pub fn new(state: &AppState, view: V) -> Result<Self> {
        for mount in Mount::ALL {
            if !view.mounted(mount) {
                return Err(UiError::MissingMount(mount).into());
            }
        }
        let store = Arc::clone(state.store());
        let cart = Cart::from_lines(store.load_cart()?);
        Ok(Self {
            api: state.api().clone(),
            store,
            view,
            cart,
            products: Vec::new(),
            currency: state.config().currency,
            panel_open: false,
        })
    }

    /// Fetch the catalog and render the initial grid and cart.
    ///
    /// Backend failures fall back to the built-in sample catalog, so this
    /// never fails; the substitution is logged by the client.
    #[instrument(skip(self))]
    pub async fn init(&mut self) {
        self.products = self
            .api
            .products_with_fallback(&ProductFilter::default())
            .await;
        info!(products = self.products.len(), "Storefront initialized");
        self.render_grid();
        self.render_cart();
    }

    /// The current cart contents.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The catalog loaded at [`CartController::init`].
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Whether the cart panel is currently open.
    #[must_use]
    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Give the view back, consuming the controller.
    #[must_use]
    pub fn into_view(self) -> V {
        self.view
    }

    /// Re-render the cart panel from current state, without mutating it.
    pub fn show_cart(&mut self) {
        self.render_cart();
    }

    /// Apply one interaction event.
    ///
    /// # Errors
    ///
    /// Returns a store error if persisting the mutated cart fails; the
    /// in-memory cart keeps the mutation either way.
    #[instrument(skip(self), fields(event = ?event))]
    pub fn dispatch(&mut self, event: CartEvent) -> Result<()> {
        match event {
            CartEvent::Add(id) => self.add_to_cart(&id),
            CartEvent::Increment(id) => self.increment(&id),
            CartEvent::Decrement(id) => self.decrement(&id),
            CartEvent::Remove(id) => self.remove(&id),
            CartEvent::ClearCart => self.clear(),
            CartEvent::ToggleCart => {
                self.toggle_panel();
                Ok(())
            }
        }
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// Unknown or sold-out products are ignored with a warning; the cart
    /// only ever holds products from the loaded catalog.
    ///
    /// # Errors
    ///
    /// Returns a store error if persisting fails.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<()> {
        let Some(product) = self.products.iter().find(|p| &p.id == id) else {
            warn!(%id, "Ignoring add for unknown product");
            return Ok(());
        };
        if product.sold_out {
            warn!(%id, "Ignoring add for sold-out product");
            return Ok(());
        }
        self.cart.add(product);
        self.persist_and_render()
    }

    /// Raise an existing line's quantity by one.
    ///
    /// # Errors
    ///
    /// Returns a store error if persisting fails.
    pub fn increment(&mut self, id: &ProductId) -> Result<()> {
        if self.cart.increment(id) {
            self.persist_and_render()?;
        }
        Ok(())
    }

    /// Lower a line's quantity by one, dropping it at zero.
    ///
    /// # Errors
    ///
    /// Returns a store error if persisting fails.
    pub fn decrement(&mut self, id: &ProductId) -> Result<()> {
        match self.cart.decrement(id) {
            Decremented::Missing => Ok(()),
            Decremented::Reduced(_) | Decremented::Removed => self.persist_and_render(),
        }
    }

    /// Remove a line outright, whatever its quantity.
    ///
    /// # Errors
    ///
    /// Returns a store error if persisting fails.
    pub fn remove(&mut self, id: &ProductId) -> Result<()> {
        if self.cart.line(id).is_none() {
            return Ok(());
        }
        self.cart.remove(id);
        self.persist_and_render()
    }

    /// Empty the cart and delete its persisted document.
    ///
    /// # Errors
    ///
    /// Returns a store error if the deletion fails.
    pub fn clear(&mut self) -> Result<()> {
        self.cart.clear();
        self.store.clear_cart()?;
        self.render_cart();
        Ok(())
    }

    /// Flip the cart panel open or closed.
    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
        self.view.set_panel_open(self.panel_open);
    }

    // Persist first: the stored document is the source of truth across
    // restarts, the rendered view is not.
    fn persist_and_render(&mut self) -> Result<()> {
        self.store.save_cart(self.cart.lines())?;
        self.render_cart();
        Ok(())
    }

    fn render_grid(&mut self) {
        let cards: Vec<ProductCard> = self
            .products
            .iter()
            .map(|p| ProductCard::for_product(p, self.currency))
            .collect();
        self.view.render_grid(&cards);
    }

    fn render_cart(&mut self) {
        let view = CartView::for_cart(&self.cart, self.currency);
        self.view.render_cart(&view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::sample_products;
    use crate::config::StorefrontConfig;
    use crate::error::AppError;
    use crate::store::MemoryStore;
    use crate::ui::{RecordingView, ViewCall};

    fn test_state() -> AppState {
        let config =
            StorefrontConfig::new("http://localhost:18080/api", "/tmp/unused", Currency::Clp)
                .expect("valid config");
        AppState::with_store(config, Arc::new(MemoryStore::new()))
    }

    fn controller_with_catalog(state: &AppState) -> CartController<RecordingView> {
        let mut controller =
            CartController::new(state, RecordingView::new()).expect("all mounts present");
        // Seed the catalog directly; init() would hit the network first.
        controller.products = sample_products();
        controller
    }

    #[test]
    fn missing_mount_fails_construction() {
        let state = test_state();
        let err = CartController::new(&state, RecordingView::without(Mount::CartBadge))
            .err()
            .expect("must fail");
        assert!(matches!(
            err,
            AppError::Ui(UiError::MissingMount(Mount::CartBadge))
        ));
        assert!(err.to_string().contains("cart-badge"));
    }

    #[test]
    fn add_persists_before_rendering() {
        let state = test_state();
        let mut controller = controller_with_catalog(&state);
        let id = controller.products[0].id.clone();

        controller.dispatch(CartEvent::Add(id)).expect("add");

        let persisted = state.store().load_cart().expect("load");
        assert_eq!(persisted.len(), 1);
        let view = controller.into_view();
        let rendered = view.last_cart().expect("cart rendered");
        assert_eq!(rendered.count, 1);
    }

    #[test]
    fn add_for_unknown_product_is_ignored() {
        let state = test_state();
        let mut controller = controller_with_catalog(&state);

        controller
            .dispatch(CartEvent::Add(ProductId::new("no-such")))
            .expect("ignored");

        assert!(controller.cart().is_empty());
        assert!(controller.into_view().last_cart().is_none());
    }

    #[test]
    fn sold_out_product_cannot_be_added() {
        let state = test_state();
        let mut controller = controller_with_catalog(&state);
        controller.products[0].sold_out = true;
        let id = controller.products[0].id.clone();

        controller.dispatch(CartEvent::Add(id)).expect("ignored");

        assert!(controller.cart().is_empty());
    }

    #[test]
    fn decrement_at_one_drops_the_line() {
        let state = test_state();
        let mut controller = controller_with_catalog(&state);
        let id = controller.products[0].id.clone();

        controller.dispatch(CartEvent::Add(id.clone())).expect("add");
        controller
            .dispatch(CartEvent::Decrement(id.clone()))
            .expect("decrement");

        assert!(controller.cart().line(&id).is_none());
        assert!(state.store().load_cart().expect("load").is_empty());
    }

    #[test]
    fn increment_never_creates_a_line() {
        let state = test_state();
        let mut controller = controller_with_catalog(&state);
        let id = controller.products[0].id.clone();

        controller
            .dispatch(CartEvent::Increment(id.clone()))
            .expect("no-op");

        assert!(controller.cart().is_empty());
        // No render either: nothing changed.
        assert!(controller.into_view().calls.is_empty());
    }

    #[test]
    fn clear_deletes_the_persisted_document() {
        let state = test_state();
        let mut controller = controller_with_catalog(&state);
        let id = controller.products[0].id.clone();

        controller.dispatch(CartEvent::Add(id)).expect("add");
        controller.dispatch(CartEvent::ClearCart).expect("clear");

        assert!(controller.cart().is_empty());
        assert!(state.store().get_raw("fb_cart").expect("raw").is_none());
        let rendered = controller.into_view().last_cart().cloned().expect("render");
        assert!(rendered.is_empty());
    }

    #[test]
    fn toggle_flips_panel_state() {
        let state = test_state();
        let mut controller = controller_with_catalog(&state);

        controller.dispatch(CartEvent::ToggleCart).expect("toggle");
        assert!(controller.panel_open());
        controller.dispatch(CartEvent::ToggleCart).expect("toggle");
        assert!(!controller.panel_open());

        let calls = controller.into_view().calls;
        assert_eq!(calls, vec![ViewCall::Panel(true), ViewCall::Panel(false)]);
    }

    #[test]
    fn cart_survives_a_new_controller_over_the_same_store() {
        let state = test_state();
        let mut controller = controller_with_catalog(&state);
        let id = controller.products[0].id.clone();
        controller.dispatch(CartEvent::Add(id.clone())).expect("add");
        controller.dispatch(CartEvent::Increment(id.clone())).expect("inc");
        drop(controller);

        let restored = controller_with_catalog(&state);
        let line = restored.cart().line(&id).expect("restored line");
        assert_eq!(line.quantity, 2);
    }
}
