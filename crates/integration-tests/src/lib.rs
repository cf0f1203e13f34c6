//! Integration tests for the Fresh Bowl storefront.
//!
//! These tests wire real components together: the controller over an
//! in-memory or file-backed store, and the API client pointed at an
//! address nothing listens on so the fail-soft fallback path runs for
//! real. No backend server is required.
//!
//! # Test Categories
//!
//! - `cart_flow` - full cart scenarios through the controller
//! - `api_fallback` - offline behavior of the API client
//! - `session_state` - persisted session documents

use std::path::Path;
use std::sync::Arc;

use fresh_bowl_core::Currency;
use fresh_bowl_storefront::{AppState, MemoryStore, StorefrontConfig};

/// A port nothing listens on; connections fail immediately.
pub const DEAD_API_BASE: &str = "http://127.0.0.1:1/api";

/// Application state over an in-memory store, pointed at a dead backend.
#[must_use]
pub fn offline_state() -> AppState {
    let config = StorefrontConfig::new(DEAD_API_BASE, "/tmp/unused", Currency::Clp)
        .expect("valid test config");
    AppState::with_store(config, Arc::new(MemoryStore::new()))
}

/// Application state over a file-backed store in `dir`, pointed at a dead
/// backend.
#[must_use]
pub fn offline_file_state(dir: &Path) -> AppState {
    let config =
        StorefrontConfig::new(DEAD_API_BASE, dir, Currency::Clp).expect("valid test config");
    AppState::new(config).expect("data dir must be creatable")
}
