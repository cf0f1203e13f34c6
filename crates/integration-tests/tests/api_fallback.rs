//! Offline behavior of the API client.
//!
//! Listings with a fallback substitute the sample catalog; everything
//! else surfaces the transport error.

use fresh_bowl_storefront::ApiError;
use fresh_bowl_storefront::api::ProductFilter;

use fresh_bowl_integration_tests::offline_state;

#[tokio::test]
async fn product_listing_falls_back_to_samples() {
    let state = offline_state();

    let products = state
        .api()
        .products_with_fallback(&ProductFilter::default())
        .await;

    assert!(products.len() >= 3);
    assert!(products.iter().any(|p| p.id.as_str() == "ens-01"));
    assert!(products.iter().all(|p| p.price > fresh_bowl_core::Price::from_minor(0)));
}

#[tokio::test]
async fn category_listing_falls_back_to_samples() {
    let state = offline_state();

    let categories = state.api().categories_with_fallback().await;

    assert!(!categories.is_empty());
}

#[tokio::test]
async fn strict_product_listing_surfaces_the_transport_error() {
    let state = offline_state();

    let err = state
        .api()
        .products(&ProductFilter::default())
        .await
        .expect_err("dead backend must error");

    assert!(matches!(err, ApiError::Http(_)));
}

#[tokio::test]
async fn ingredient_listing_has_no_fallback() {
    let state = offline_state();

    let result = state.api().ingredients(None).await;

    assert!(result.is_err());
}
