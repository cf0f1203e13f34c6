use super::{CartView, Mount, ProductCard};

/// Presentation port for the storefront widget.
///
/// Implementors own whatever rendering surface exists (a terminal, a
/// test recorder); the controller never touches it directly.
pub trait StorefrontView {
    /// Whether the named mount point exists on this surface.
    fn mounted(&self, mount: Mount) -> bool;

    /// Replace the product grid contents.
    fn render_grid(&mut self, cards: &[ProductCard]);

    /// Replace the cart panel contents, badge included.
    fn render_cart(&mut self, cart: &CartView);

    /// Show or hide the cart panel.
    fn set_panel_open(&mut self, open: bool);
}

/// One recorded view invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    /// `render_grid` with this many cards.
    Grid(usize),
    /// `render_cart` with the full model.
    Cart(CartView),
    /// `set_panel_open`.
    Panel(bool),
}

/// A view that records every call, for driving the controller in tests.
#[derive(Debug, Default)]
pub struct RecordingView {
    /// Calls in arrival order.
    pub calls: Vec<ViewCall>,
    /// Mount points reported as missing.
    pub missing: Vec<Mount>,
}

impl RecordingView {
    /// A view with every mount point present.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A view that lacks the given mount point.
    #[must_use]
    pub fn without(mount: Mount) -> Self {
        Self {
            calls: Vec::new(),
            missing: vec![mount],
        }
    }

    /// The most recent cart model rendered, if any.
    #[must_use]
    pub fn last_cart(&self) -> Option<&CartView> {
        self.calls.iter().rev().find_map(|call| match call {
            ViewCall::Cart(view) => Some(view),
            _ => None,
        })
    }
}

impl StorefrontView for RecordingView {
    fn mounted(&self, mount: Mount) -> bool {
        !self.missing.contains(&mount)
    }

    fn render_grid(&mut self, cards: &[ProductCard]) {
        self.calls.push(ViewCall::Grid(cards.len()));
    }

    fn render_cart(&mut self, cart: &CartView) {
        self.calls.push(ViewCall::Cart(cart.clone()));
    }

    fn set_panel_open(&mut self, open: bool) {
        self.calls.push(ViewCall::Panel(open));
    }
}
