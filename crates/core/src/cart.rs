//! The cart state machine.
//!
//! Per line quantity the states are: absent -> 1 on first add,
//! n -> n+1 on add/increment, n -> n-1 on decrement with auto-removal at
//! zero, and absent on explicit removal at any quantity. Two invariants
//! hold after every operation:
//!
//! - every retained line has `quantity >= 1`
//! - at most one line exists per product identifier
//!
//! Derived values (`item_count`, `total`) are computed on demand and never
//! stored, so they cannot drift from the lines.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// One product-quantity pairing within a cart.
///
/// Name, price, and image are denormalised copies taken at add time so a
/// persisted cart renders without refetching the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line refers to.
    pub product_id: ProductId,
    /// Display name copied from the product.
    pub name: String,
    /// Unit price copied from the product.
    pub unit_price: Price,
    /// Image URL copied from the product.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Number of units; always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Create a line for a product with the given quantity.
    #[must_use]
    pub fn new(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            image_url: product.image_url.clone(),
            quantity,
        }
    }

    /// Subtotal for this line (quantity x unit price).
    #[must_use]
    pub const fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// What a decrement did to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decremented {
    /// The quantity dropped by one and the line remains.
    Reduced(u32),
    /// The quantity reached zero and the line was removed.
    Removed,
    /// No line existed for the identifier.
    Missing,
}

/// An ordered collection of cart lines.
///
/// Lines keep insertion order. The cart is fully reconstructable from its
/// persisted form; see [`Cart::from_lines`] for how out-of-invariant
/// persisted data is repaired rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Rebuild a cart from persisted lines.
    ///
    /// Persisted data is repaired, not rejected: lines with a zero
    /// quantity are dropped, and duplicate lines for one product are
    /// merged into the first occurrence.
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            match cart.find_mut(&line.product_id) {
                Some(existing) => existing.quantity += line.quantity,
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Look up the line for a product, if present.
    #[must_use]
    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == id)
    }

    fn find_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| &l.product_id == id)
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line or appends a new one with quantity 1.
    pub fn add(&mut self, product: &Product) {
        self.add_units(product, 1);
    }

    /// Add `quantity` units of a product in one step.
    pub fn add_units(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.find_mut(&product.id) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine::new(product, quantity)),
        }
    }

    /// Increment the line for `id` by one.
    ///
    /// Returns `false` when no such line exists; incrementing cannot
    /// create a line because the cart has no price to copy from.
    pub fn increment(&mut self, id: &ProductId) -> bool {
        match self.find_mut(id) {
            Some(line) => {
                line.quantity += 1;
                true
            }
            None => false,
        }
    }

    /// Decrement the line for `id` by one, removing it at zero.
    pub fn decrement(&mut self, id: &ProductId) -> Decremented {
        let Some(line) = self.find_mut(id) else {
            return Decremented::Missing;
        };
        if line.quantity > 1 {
            line.quantity -= 1;
            Decremented::Reduced(line.quantity)
        } else {
            self.remove(id);
            Decremented::Removed
        }
    }

    /// Remove the line for `id` entirely, whatever its quantity.
    pub fn remove(&mut self, id: &ProductId) {
        self.lines.retain(|l| &l.product_id != id);
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total number of units across all lines (the badge value).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Grand total: sum of quantity x unit price over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}
