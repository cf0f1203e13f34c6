//! The `shop` command: render the grid and the current cart.

use fresh_bowl_storefront::{AppState, CartController, Result};

use crate::view::TerminalView;

/// Fetch the catalog (falling back to sample data offline) and print the
/// product grid followed by the persisted cart.
pub async fn run(state: &AppState) -> Result<()> {
    let mut controller = CartController::new(state, TerminalView::full())?;
    controller.init().await;
    Ok(())
}
