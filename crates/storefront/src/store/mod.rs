//! Persistence port for cart and session state.
//!
//! The widget persists exactly two logical keys: the cart (an ordered list
//! of line records) and the session record. [`StateStore`] abstracts the
//! medium behind raw string-keyed JSON documents, so swapping browser-like
//! file storage for anything else never touches cart logic.
//!
//! # Degradation contract
//!
//! Absent or malformed stored documents never raise: `load_cart` yields an
//! empty list and `load_session` yields `None`, logging at warn so the
//! corruption is visible in diagnostics. Only I/O failures surface as
//! [`StoreError`].

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

use fresh_bowl_core::{CartLine, SessionRecord};

/// Storage keys for the two persisted documents.
pub mod keys {
    /// Key for the cart line list.
    pub const CART: &str = "fb_cart";

    /// Key for the session record.
    pub const SESSION: &str = "fb_session";
}

/// Errors that can occur when accessing the local store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying medium failed (file I/O, ...).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a value for storage failed.
    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key-value persistence port.
///
/// Backends implement the three raw operations over JSON text; the typed
/// cart and session operations are provided on top and carry the
/// degradation contract for malformed data.
pub trait StateStore: Send + Sync {
    /// Read the raw JSON document stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the medium itself fails. A missing key is
    /// `Ok(None)`, not an error.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write the raw JSON document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the medium itself fails.
    fn put_raw(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the document stored under `key`. Deleting a missing key is
    /// a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the medium itself fails.
    fn delete_raw(&self, key: &str) -> Result<(), StoreError>;

    /// Load the persisted cart lines.
    ///
    /// Absent or unparseable data yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only for medium failures.
    fn load_cart(&self) -> Result<Vec<CartLine>, StoreError> {
        Ok(decode_or_default(keys::CART, self.get_raw(keys::CART)?).unwrap_or_default())
    }

    /// Persist the cart lines.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if encoding or the medium fails.
    fn save_cart(&self, lines: &[CartLine]) -> Result<(), StoreError> {
        self.put_raw(keys::CART, &encode(&lines)?)
    }

    /// Delete the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the medium fails.
    fn clear_cart(&self) -> Result<(), StoreError> {
        self.delete_raw(keys::CART)
    }

    /// Load the persisted session record.
    ///
    /// Absent or unparseable data yields `None` ("logged out").
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only for medium failures.
    fn load_session(&self) -> Result<Option<SessionRecord>, StoreError> {
        Ok(decode_or_default(keys::SESSION, self.get_raw(keys::SESSION)?))
    }

    /// Persist the session record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if encoding or the medium fails.
    fn save_session(&self, record: &SessionRecord) -> Result<(), StoreError> {
        self.put_raw(keys::SESSION, &encode(record)?)
    }

    /// Delete the persisted session record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the medium fails.
    fn clear_session(&self) -> Result<(), StoreError> {
        self.delete_raw(keys::SESSION)
    }
}

fn encode<T: Serialize>(value: &T) -> Result<String, StoreError> {
    Ok(serde_json::to_string(value)?)
}

/// Decode a stored document, treating malformed data as absent.
fn decode_or_default<T: DeserializeOwned>(key: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(key, %error, "Discarding malformed stored document");
            None
        }
    }
}
