//! The cart widget: controller, events, and the view port.
//!
//! Presentation is behind the [`StorefrontView`] trait; the controller
//! only produces display models ([`ProductCard`], [`CartView`]) and
//! consumes [`CartEvent`]s, so the same logic drives a terminal, a test
//! recorder, or a real DOM. The essential contract of the original event
//! delegation survives: one event resolves to exactly one product or
//! cart-line identifier.

mod controller;
mod view;

pub use controller::CartController;
pub use view::{RecordingView, StorefrontView, ViewCall};

use thiserror::Error;

use fresh_bowl_core::{Cart, CartLine, Currency, Product, ProductId};

/// The named mount points the widget binds to.
///
/// All of them must exist before initialization; a missing one aborts
/// controller construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mount {
    /// Container the product cards render into.
    ProductGrid,
    /// Item-count badge on the cart toggle.
    CartBadge,
    /// The sliding cart panel.
    CartPanel,
    /// Control that opens and closes the panel.
    CartToggle,
    /// Line-item list inside the panel.
    CartList,
    /// Grand-total display inside the panel.
    CartTotal,
}

impl Mount {
    /// Every mount point the widget requires.
    pub const ALL: [Self; 6] = [
        Self::ProductGrid,
        Self::CartBadge,
        Self::CartPanel,
        Self::CartToggle,
        Self::CartList,
        Self::CartTotal,
    ];

    /// The conventional DOM-ish name, used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ProductGrid => "product-grid",
            Self::CartBadge => "cart-badge",
            Self::CartPanel => "cart-panel",
            Self::CartToggle => "cart-toggle",
            Self::CartList => "cart-list",
            Self::CartTotal => "cart-total",
        }
    }
}

impl std::fmt::Display for Mount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// UI precondition violations. All fatal at startup.
#[derive(Debug, Error)]
pub enum UiError {
    /// A required mount point is absent from the view.
    #[error("Missing mount point: {0}")]
    MissingMount(Mount),
}

/// An interaction event, already resolved to an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// "Add" control on a product card.
    Add(ProductId),
    /// "+" control on a cart line.
    Increment(ProductId),
    /// "−" control on a cart line.
    Decrement(ProductId),
    /// "×" control on a cart line.
    Remove(ProductId),
    /// Empty the whole cart.
    ClearCart,
    /// Open/close the cart panel.
    ToggleCart,
}

// =============================================================================
// Display models
// =============================================================================

/// Product card display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    /// The product to add when the card's control fires.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Formatted unit price.
    pub price: String,
    /// Card image, if any.
    pub image_url: Option<String>,
    /// Whether the add control should be disabled.
    pub sold_out: bool,
}

impl ProductCard {
    /// Project a product into its card.
    #[must_use]
    pub fn for_product(product: &Product, currency: Currency) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price.display(currency),
            image_url: product.image_url.clone(),
            sold_out: product.sold_out,
        }
    }
}

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    /// The product this line refers to.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Formatted unit price.
    pub unit_price: String,
    /// Units in the line.
    pub quantity: u32,
    /// Formatted line subtotal.
    pub line_total: String,
    /// Line image, if any.
    pub image_url: Option<String>,
}

/// Cart panel display data: badge count, lines, grand total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Lines in insertion order.
    pub lines: Vec<CartLineView>,
    /// Badge value: total units across lines.
    pub count: u32,
    /// Formatted grand total.
    pub total: String,
}

impl CartView {
    /// Project a cart into its panel model.
    #[must_use]
    pub fn for_cart(cart: &Cart, currency: Currency) -> Self {
        Self {
            lines: cart.lines().iter().map(|l| line_view(l, currency)).collect(),
            count: cart.item_count(),
            total: cart.total().display(currency),
        }
    }

    /// Whether the panel should render the empty-cart placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn line_view(line: &CartLine, currency: Currency) -> CartLineView {
    CartLineView {
        id: line.product_id.clone(),
        name: line.name.clone(),
        unit_price: line.unit_price.display(currency),
        quantity: line.quantity,
        line_total: line.line_total().display(currency),
        image_url: line.image_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fresh_bowl_core::Price;

    #[test]
    fn cart_view_projects_counts_and_totals() {
        let product = Product {
            id: ProductId::new("ens-01"),
            name: "César Clásica".to_owned(),
            price: Price::from_minor(4990),
            description: None,
            image_url: None,
            category_id: None,
            active: true,
            sold_out: false,
        };
        let mut cart = Cart::new();
        cart.add_units(&product, 2);

        let view = CartView::for_cart(&cart, Currency::Clp);
        assert_eq!(view.count, 2);
        assert!(!view.is_empty());
        let line = view.lines.first().expect("line");
        assert_eq!(line.quantity, 2);
        assert_ne!(line.unit_price, line.line_total);
    }

    #[test]
    fn empty_cart_view_requests_placeholder() {
        let view = CartView::for_cart(&Cart::new(), Currency::Clp);
        assert!(view.is_empty());
        assert_eq!(view.count, 0);
    }

    #[test]
    fn mount_names_match_diagnostics() {
        assert_eq!(Mount::ProductGrid.to_string(), "product-grid");
        assert_eq!(Mount::ALL.len(), 6);
    }
}
