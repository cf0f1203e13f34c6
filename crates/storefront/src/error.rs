//! Unified error handling for the storefront widget.
//!
//! Provides a unified `AppError` that wraps the per-concern errors. The
//! failure taxonomy is deliberately small:
//!
//! - remote failures ([`ApiError`]) are recoverable and, for product and
//!   category listings, substituted with sample data at the call site
//! - persisted-state failures ([`StoreError`]) cover I/O only; malformed
//!   stored data never errors, it degrades to empty/absent state
//! - UI failures ([`UiError`]) are startup precondition violations and
//!   abort controller construction

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::store::StoreError;
use crate::ui::UiError;

/// Application-level error type for the storefront widget.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A remote API operation failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The local store failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A UI precondition was violated.
    #[error("UI error: {0}")]
    Ui(#[from] UiError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display() {
        let err = AppError::Ui(UiError::MissingMount(crate::ui::Mount::CartBadge));
        assert!(err.to_string().contains("cart-badge"));
    }
}
