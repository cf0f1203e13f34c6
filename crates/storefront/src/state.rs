//! One-time application wiring.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::store::{JsonFileStore, StateStore};

/// Shared application state: config, persistence backend, API client.
///
/// Built exactly once at startup and cloned wherever needed; clones are
/// cheap and refer to the same backend and client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: Arc<dyn StateStore>,
    api: ApiClient,
}

impl AppState {
    /// Wire up the application with a file-backed store under the
    /// configured data directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the data directory cannot be created.
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let store: Arc<dyn StateStore> = Arc::new(JsonFileStore::open(&config.data_dir)?);
        Ok(Self::with_store(config, store))
    }

    /// Wire up the application with an explicit store backend.
    #[must_use]
    pub fn with_store(config: StorefrontConfig, store: Arc<dyn StateStore>) -> Self {
        let api = ApiClient::new(&config, Arc::clone(&store));
        Self {
            inner: Arc::new(AppStateInner { config, store, api }),
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// The persistence backend.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn StateStore> {
        &self.inner.store
    }

    /// The backend API client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use fresh_bowl_core::Currency;

    #[test]
    fn clones_share_the_same_store() {
        let config =
            StorefrontConfig::new("http://localhost:8000/api", "/tmp/fb", Currency::Clp)
                .expect("valid config");
        let state = AppState::with_store(config, Arc::new(MemoryStore::new()));
        let other = state.clone();

        let mut cart = fresh_bowl_core::Cart::new();
        let product = crate::api::sample_products().remove(0);
        cart.add(&product);
        state.store().save_cart(cart.lines()).expect("save");

        let loaded = other.store().load_cart().expect("load");
        assert_eq!(loaded.len(), 1);
    }
}
