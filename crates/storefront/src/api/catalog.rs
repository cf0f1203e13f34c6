//! Catalog reads: products, categories, ingredients.
//!
//! Product and category listings carry the fail-soft contract: the
//! `*_with_fallback` variants substitute the built-in sample catalog when
//! the backend is unreachable, so the grid never renders empty or broken.
//! Ingredients have no sample set; callers handle the failure themselves.

use tracing::{debug, instrument, warn};

use fresh_bowl_core::{Category, CategoryId, Ingredient, Price, Product, ProductId};

use super::cache::{CacheKey, CacheValue};
use super::wire::{CategoryWire, IngredientWire, ProductWire};
use super::{ApiClient, ApiError};

/// Filter for product listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Restrict to one category.
    pub category: Option<CategoryId>,
    /// Restrict by listing state.
    pub active: Option<bool>,
}

impl ProductFilter {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(category) = &self.category {
            query.push(("categoria_id", category.as_str().to_owned()));
        }
        if let Some(active) = self.active {
            query.push(("activo", active.to_string()));
        }
        query
    }

    fn cache_key(&self) -> CacheKey {
        CacheKey::Products {
            category: self.category.as_ref().map(|c| c.as_str().to_owned()),
            active: self.active,
        }
    }
}

impl ApiClient {
    /// List products, optionally filtered.
    ///
    /// Successful responses are cached for five minutes.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or a
    /// malformed body.
    #[instrument(skip(self))]
    pub async fn products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        let cache_key = filter.cache_key();
        if let Some(CacheValue::Products(products)) = self.cached(&cache_key).await {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let wires: Vec<ProductWire> = self.get_json("/productos/", &filter.query()).await?;
        let products = wires
            .into_iter()
            .map(|w| w.into_product(self.currency()))
            .collect::<Result<Vec<_>, _>>()?;

        self.insert_cache(cache_key, CacheValue::Products(products.clone()))
            .await;
        Ok(products)
    }

    /// List products, substituting the sample set on any failure.
    ///
    /// Never empty and never an error; the failure is logged. Fallback
    /// data is not cached, so a recovered backend is picked up on the
    /// next call.
    pub async fn products_with_fallback(&self, filter: &ProductFilter) -> Vec<Product> {
        match self.products(filter).await {
            Ok(products) => products,
            Err(error) => {
                warn!(%error, "Product listing failed, serving sample catalog");
                sample_products()
            }
        }
    }

    /// Fetch a single product by identifier. No fallback.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any failure, including 404.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn product(&self, id: &ProductId) -> Result<Product, ApiError> {
        let wire: ProductWire = self.get_json(&format!("/productos/{id}"), &[]).await?;
        wire.into_product(self.currency())
    }

    /// List categories.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or a
    /// malformed body.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        if let Some(CacheValue::Categories(categories)) = self.cached(&CacheKey::Categories).await
        {
            debug!("Cache hit for categories");
            return Ok(categories);
        }

        let wires: Vec<CategoryWire> = self.get_json("/categorias/", &[]).await?;
        let categories: Vec<Category> = wires.into_iter().map(Category::from).collect();

        self.insert_cache(CacheKey::Categories, CacheValue::Categories(categories.clone()))
            .await;
        Ok(categories)
    }

    /// List categories, substituting the sample set on any failure.
    pub async fn categories_with_fallback(&self) -> Vec<Category> {
        match self.categories().await {
            Ok(categories) => categories,
            Err(error) => {
                warn!(%error, "Category listing failed, serving sample categories");
                sample_categories()
            }
        }
    }

    /// Fetch a single category by identifier. No fallback.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any failure, including 404.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn category(&self, id: &CategoryId) -> Result<Category, ApiError> {
        let wire: CategoryWire = self.get_json(&format!("/categorias/{id}"), &[]).await?;
        Ok(wire.into())
    }

    /// List ingredients, optionally only the add-ons. No fallback: the
    /// caller sees the failure reason.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or a
    /// malformed body.
    #[instrument(skip(self))]
    pub async fn ingredients(&self, extra_only: Option<bool>) -> Result<Vec<Ingredient>, ApiError> {
        let mut query = Vec::new();
        if let Some(extra) = extra_only {
            query.push(("adicional", extra.to_string()));
        }

        let wires: Vec<IngredientWire> = self.get_json("/ingredientes/", &query).await?;
        wires
            .into_iter()
            .map(|w| w.into_ingredient(self.currency()))
            .collect()
    }
}

/// The built-in sample products served when the backend is down.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        sample_product(
            "ens-01",
            "César Clásica",
            4990,
            "Lechuga romana, pollo, parmesano y crutones",
            "https://images.unsplash.com/photo-1568605114967-8130f3a36994?w=800",
        ),
        sample_product(
            "ens-02",
            "Quinoa Power",
            5490,
            "Quinoa, espinaca, palta y tomate cherry",
            "https://images.unsplash.com/photo-1551183053-bf91a1d81141?w=800",
        ),
        sample_product(
            "ens-03",
            "Mediterránea",
            5990,
            "Mix verdes, aceitunas, queso feta y pepino",
            "https://images.unsplash.com/photo-1540420773420-3366772f4999?w=800",
        ),
    ]
}

/// The built-in sample categories served when the backend is down.
#[must_use]
pub fn sample_categories() -> Vec<Category> {
    vec![
        sample_category("cat-01", "Ensaladas Clásicas", "ensaladas-clasicas"),
        sample_category("cat-02", "Bowls Proteicos", "bowls-proteicos"),
        sample_category("cat-03", "Veganas", "veganas"),
    ]
}

fn sample_product(id: &str, name: &str, price: i64, description: &str, image: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_minor(price),
        description: Some(description.to_owned()),
        image_url: Some(image.to_owned()),
        category_id: None,
        active: true,
        sold_out: false,
    }
}

fn sample_category(id: &str, name: &str, slug: &str) -> Category {
    Category {
        id: CategoryId::new(id),
        name: name.to_owned(),
        slug: slug.to_owned(),
        visible: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use fresh_bowl_core::Currency;

    use crate::config::StorefrontConfig;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn unreachable_backend_serves_samples_but_strict_reads_error() {
        let config =
            StorefrontConfig::new("http://127.0.0.1:1/api", "/tmp/unused", Currency::Clp)
                .expect("valid config");
        let client = ApiClient::new(&config, Arc::new(MemoryStore::new()));

        let products = client
            .products_with_fallback(&ProductFilter::default())
            .await;
        assert_eq!(products.len(), 3);

        let err = client
            .products(&ProductFilter::default())
            .await
            .expect_err("dead backend must error");
        assert!(matches!(err, ApiError::Http(_)));
    }

    #[test]
    fn sample_catalog_is_never_empty() {
        let products = sample_products();
        assert!(products.len() >= 3);
        assert!(products.iter().all(|p| p.price > Price::ZERO));
        assert!(products.iter().all(|p| p.active && !p.sold_out));

        assert!(sample_categories().len() >= 3);
    }

    #[test]
    fn sample_ids_are_unique() {
        let products = sample_products();
        let mut ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn filter_builds_backend_query_params() {
        let filter = ProductFilter {
            category: Some(CategoryId::new("cat-02")),
            active: Some(true),
        };
        assert_eq!(
            filter.query(),
            vec![
                ("categoria_id", "cat-02".to_owned()),
                ("activo", "true".to_owned()),
            ]
        );
        assert!(ProductFilter::default().query().is_empty());
    }
}
