//! Terminal rendering surface for the storefront widget.

use fresh_bowl_storefront::StorefrontView;
use fresh_bowl_storefront::ui::{CartView, Mount, ProductCard};

/// A view that prints the grid and cart to stdout.
///
/// Every mount point is always present on a terminal, so construction of
/// a controller over this view cannot fail. The "panel" maps to whether
/// the cart is printed at all.
pub struct TerminalView {
    show_grid: bool,
}

impl TerminalView {
    /// Print both the product grid and the cart.
    #[must_use]
    pub fn full() -> Self {
        Self { show_grid: true }
    }

    /// Print only the cart; grid renders are swallowed.
    #[must_use]
    pub fn cart_only() -> Self {
        Self { show_grid: false }
    }
}

impl StorefrontView for TerminalView {
    fn mounted(&self, _mount: Mount) -> bool {
        true
    }

    fn render_grid(&mut self, cards: &[ProductCard]) {
        if !self.show_grid {
            return;
        }
        println!("Products");
        println!("--------");
        for card in cards {
            let tag = if card.sold_out { "  (sold out)" } else { "" };
            println!("{:<10} {:<24} {}{tag}", card.id.as_str(), card.name, card.price);
        }
        println!();
    }

    fn render_cart(&mut self, cart: &CartView) {
        println!("Cart");
        println!("----");
        if cart.is_empty() {
            println!("(empty)");
            return;
        }
        for line in &cart.lines {
            println!(
                "{:<10} {} x {} @ {} = {}",
                line.id.as_str(),
                line.quantity,
                line.name,
                line.unit_price,
                line.line_total
            );
        }
        println!("Total: {} ({} items)", cart.total, cart.count);
    }

    fn set_panel_open(&mut self, open: bool) {
        println!("Cart panel {}", if open { "opened" } else { "closed" });
    }
}
