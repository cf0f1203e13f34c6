//! REST client for the Fresh Bowl backend.
//!
//! # Architecture
//!
//! - Plain JSON-over-HTTP via `reqwest`; endpoints are grouped the way the
//!   backend groups its routers (catalog, session, orders)
//! - Successful product and category listings are cached in-memory via
//!   `moka` (5-minute TTL); fallback data is never cached
//! - A bearer token is attached automatically when the local store holds a
//!   session record with one
//!
//! # Failure contract
//!
//! Every remote operation returns `Result<T, ApiError>`, so a legitimate
//! empty list is never conflated with a transport failure. Product and
//! category listings additionally offer `*_with_fallback` variants that
//! log the failure and substitute the built-in sample catalog.

mod cache;
mod wire;

pub mod catalog;
pub mod orders;
pub mod session;

pub use catalog::{ProductFilter, sample_categories, sample_products};
pub use session::UserPatch;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::error;

use fresh_bowl_core::Currency;

use crate::config::StorefrontConfig;
use crate::store::StateStore;

use cache::{CacheKey, CacheValue};

/// Errors that can occur when calling the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("API error: {status} - {detail}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The backend's `detail` message, or a generic one.
        detail: String,
    },

    /// The response body was not what we expected.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Client for the Fresh Bowl backend API.
///
/// Cheaply cloneable; all clones share one connection pool, cache, and
/// store handle. Construct it once and pass it to consumers rather than
/// reaching for process-wide state.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base: String,
    currency: Currency,
    cache: Cache<CacheKey, CacheValue>,
    store: Arc<dyn StateStore>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// `store` supplies the session record whose token is attached as a
    /// bearer header, and receives the record written by a successful
    /// login.
    #[must_use]
    pub fn new(config: &StorefrontConfig, store: Arc<dyn StateStore>) -> Self {
        let cache = Cache::builder()
            .max_capacity(100)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base: config.api_base.as_str().trim_end_matches('/').to_owned(),
                currency: config.currency,
                cache,
                store,
            }),
        }
    }

    /// The shop currency used when normalising wire amounts.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.inner.currency
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base)
    }

    /// Token from the persisted session record, if any.
    fn bearer_token(&self) -> Option<String> {
        self.inner
            .store
            .load_session()
            .ok()
            .flatten()
            .and_then(|record| record.token)
    }

    pub(crate) fn store(&self) -> &dyn StateStore {
        self.inner.store.as_ref()
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let text = self.send_text(request).await?;
        serde_json::from_str(&text).map_err(|e| {
            error!(
                error = %e,
                body = %text.chars().take(500).collect::<String>(),
                "Failed to parse backend response"
            );
            ApiError::Parse(e.to_string())
        })
    }

    async fn send_text(&self, request: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let request = match self.bearer_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return Ok(text);
        }

        Err(ApiError::Status {
            status: status.as_u16(),
            detail: extract_detail(status, &text),
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self.inner.client.get(self.endpoint(path)).query(query);
        self.send_json(request).await
    }

    pub(crate) async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.inner.client.post(self.endpoint(path)).json(body);
        self.send_json(request).await
    }

    pub(crate) async fn put_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.inner.client.put(self.endpoint(path)).json(body);
        self.send_json(request).await
    }

    /// DELETE with no expected body (the backend answers 204).
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.inner.client.delete(self.endpoint(path));
        self.send_text(request).await.map(|_| ())
    }

    async fn cached(&self, key: &CacheKey) -> Option<CacheValue> {
        self.inner.cache.get(key).await
    }

    async fn insert_cache(&self, key: CacheKey, value: CacheValue) {
        self.inner.cache.insert(key, value).await;
    }
}

/// Pull the FastAPI `{"detail": ...}` message out of an error body.
fn extract_detail(status: StatusCode, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct Detail {
        detail: String,
    }

    serde_json::from_str::<Detail>(body)
        .map(|d| d.detail)
        .unwrap_or_else(|_| format!("HTTP {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_extraction_prefers_backend_message() {
        let detail = extract_detail(
            StatusCode::NOT_FOUND,
            r#"{"detail":"Producto no encontrado"}"#,
        );
        assert_eq!(detail, "Producto no encontrado");
    }

    #[test]
    fn detail_extraction_falls_back_to_status() {
        let detail = extract_detail(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(detail, "HTTP 502 Bad Gateway");
    }
}
