//! The `cart` subcommands: mutate and inspect the persisted cart.
//!
//! All of them run through the same controller the interactive surfaces
//! use, so persistence ordering and quantity rules are identical. Only
//! `add` needs the catalog (to resolve the product); the rest operate on
//! lines already in the cart and skip the network entirely.

use fresh_bowl_core::ProductId;
use fresh_bowl_storefront::ui::CartEvent;
use fresh_bowl_storefront::{AppState, CartController, Result};

use crate::view::TerminalView;

fn controller(state: &AppState) -> Result<CartController<TerminalView>> {
    CartController::new(state, TerminalView::cart_only())
}

/// Add `quantity` units of a product, merging into an existing line.
pub async fn add(state: &AppState, id: &ProductId, quantity: u32) -> Result<()> {
    let mut controller = controller(state)?;
    controller.init().await;
    for _ in 0..quantity {
        controller.dispatch(CartEvent::Add(id.clone()))?;
    }
    if controller.cart().line(id).is_none() {
        println!("Unknown or unavailable product: {id}");
    }
    Ok(())
}

/// Raise an existing line's quantity by one.
pub fn plus(state: &AppState, id: &ProductId) -> Result<()> {
    let mut controller = controller(state)?;
    controller.dispatch(CartEvent::Increment(id.clone()))?;
    if controller.cart().line(id).is_none() {
        println!("No such line in the cart: {id}");
    }
    Ok(())
}

/// Lower a line's quantity by one, dropping it at zero.
pub fn minus(state: &AppState, id: &ProductId) -> Result<()> {
    let mut controller = controller(state)?;
    controller.dispatch(CartEvent::Decrement(id.clone()))?;
    Ok(())
}

/// Remove a line regardless of its quantity.
pub fn remove(state: &AppState, id: &ProductId) -> Result<()> {
    let mut controller = controller(state)?;
    controller.dispatch(CartEvent::Remove(id.clone()))?;
    Ok(())
}

/// Print the current cart without mutating it.
pub fn show(state: &AppState) -> Result<()> {
    let mut controller = controller(state)?;
    controller.show_cart();
    Ok(())
}

/// Empty the cart and delete its persisted document.
pub fn clear(state: &AppState) -> Result<()> {
    let mut controller = controller(state)?;
    controller.dispatch(CartEvent::ClearCart)?;
    Ok(())
}
