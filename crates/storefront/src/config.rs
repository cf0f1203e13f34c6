//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `FRESH_BOWL_API_BASE` - Base URL of the backend API
//!   (default: `http://localhost:8000/api`)
//! - `FRESH_BOWL_DATA_DIR` - Directory for persisted cart/session state
//!   (default: `.fresh-bowl`)
//! - `FRESH_BOWL_CURRENCY` - Shop currency code, `CLP`/`USD`/`EUR`
//!   (default: `CLP`)

use std::env;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use fresh_bowl_core::Currency;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub api_base: Url,
    /// Directory holding the persisted cart and session documents.
    pub data_dir: PathBuf,
    /// Currency used for price display.
    pub currency: Currency,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base = parse_api_base(&get_env_or_default(
            "FRESH_BOWL_API_BASE",
            "http://localhost:8000/api",
        ))?;

        let data_dir = PathBuf::from(get_env_or_default("FRESH_BOWL_DATA_DIR", ".fresh-bowl"));

        let currency = parse_currency(&get_env_or_default("FRESH_BOWL_CURRENCY", "CLP"))?;

        Ok(Self {
            api_base,
            data_dir,
            currency,
        })
    }

    /// Configuration with explicit values, bypassing the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `api_base` is not a valid URL.
    pub fn new(
        api_base: &str,
        data_dir: impl Into<PathBuf>,
        currency: Currency,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base: parse_api_base(api_base)?,
            data_dir: data_dir.into(),
            currency,
        })
    }
}

fn parse_api_base(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim_end_matches('/'))
        .map_err(|e| ConfigError::InvalidEnvVar("FRESH_BOWL_API_BASE".to_owned(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar(
            "FRESH_BOWL_API_BASE".to_owned(),
            "URL cannot be a base".to_owned(),
        ));
    }
    Ok(url)
}

fn parse_currency(raw: &str) -> Result<Currency, ConfigError> {
    match raw.to_ascii_uppercase().as_str() {
        "CLP" => Ok(Currency::Clp),
        "USD" => Ok(Currency::Usd),
        "EUR" => Ok(Currency::Eur),
        other => Err(ConfigError::InvalidEnvVar(
            "FRESH_BOWL_CURRENCY".to_owned(),
            format!("unsupported currency: {other}"),
        )),
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_config_parses_base_url() {
        let config = StorefrontConfig::new("http://localhost:8000/api/", "/tmp/fb", Currency::Clp)
            .expect("valid config");
        assert_eq!(config.api_base.as_str(), "http://localhost:8000/api");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/fb"));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = StorefrontConfig::new("not a url", "/tmp/fb", Currency::Clp)
            .expect_err("must reject");
        assert!(matches!(err, ConfigError::InvalidEnvVar(name, _) if name == "FRESH_BOWL_API_BASE"));
    }

    #[test]
    fn currency_parsing_is_case_insensitive() {
        assert!(matches!(parse_currency("clp"), Ok(Currency::Clp)));
        assert!(matches!(parse_currency("UsD"), Ok(Currency::Usd)));
        assert!(parse_currency("GBP").is_err());
    }
}
