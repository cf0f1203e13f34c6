//! Catalog types: products, categories, and ingredients.
//!
//! These are the canonical in-memory shapes. The backend's inconsistent
//! field naming (`_id` vs `id`, `precio_base` vs `precio`) is normalised
//! at the data-access boundary before these types are constructed, so
//! everything past that boundary sees one spelling.

use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, IngredientId, Price, ProductId};

/// A product in the catalog.
///
/// Immutable once fetched; sourced from the backend or from the built-in
/// sample set when the backend is unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Canonical identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in minor currency units.
    pub price: Price,
    /// Optional marketing copy.
    #[serde(default)]
    pub description: Option<String>,
    /// Image URL for the product card.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Owning category, if assigned.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Whether the product is listed at all.
    #[serde(default = "default_true")]
    pub active: bool,
    /// Whether the product is temporarily out of stock.
    #[serde(default)]
    pub sold_out: bool,
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Canonical identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL-friendly slug.
    #[serde(default)]
    pub slug: String,
    /// Whether the category appears in navigation.
    #[serde(default = "default_true")]
    pub visible: bool,
}

/// A salad ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Canonical identifier.
    pub id: IngredientId,
    /// Display name.
    pub name: String,
    /// Whether this is an optional add-on rather than a base ingredient.
    #[serde(default)]
    pub extra: bool,
    /// Surcharge when added as an extra.
    #[serde(default)]
    pub extra_price: Price,
}

const fn default_true() -> bool {
    true
}
