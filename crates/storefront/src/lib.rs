//! Fresh Bowl Storefront - product grid and cart widget library.
//!
//! # Architecture
//!
//! - [`api`] - REST client for the Fresh Bowl backend with a fail-soft
//!   fallback to built-in sample data for product and category listings
//! - [`store`] - persistence port for cart and session state, with file
//!   and in-memory backends
//! - [`cart`] - repository for the persisted cart record
//! - [`ui`] - the cart controller, its event vocabulary, and the view port
//! - [`state`] - one-time wiring of config, store, and API client
//!
//! # Failure policy
//!
//! Remote failures surface as [`api::ApiError`]; product and category
//! listings additionally offer `*_with_fallback` variants that substitute
//! the sample catalog so the grid never renders empty. Malformed persisted
//! state degrades to "empty cart" / "no session". The only fatal condition
//! is a missing UI mount point at controller construction.
//!
//! # Example
//!
//! ```rust,ignore
//! use fresh_bowl_storefront::{config::StorefrontConfig, state::AppState};
//! use fresh_bowl_storefront::ui::{CartController, CartEvent};
//!
//! let config = StorefrontConfig::from_env()?;
//! let state = AppState::new(config)?;
//! let mut controller = CartController::new(&state, view)?;
//! controller.init().await;
//! controller.dispatch(CartEvent::Add("ens-01".into()))?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod config;
pub mod error;
pub mod state;
pub mod store;
pub mod ui;

pub use api::{ApiClient, ApiError};
pub use cart::CartRepository;
pub use config::StorefrontConfig;
pub use error::{AppError, Result};
pub use state::AppState;
pub use store::{JsonFileStore, MemoryStore, StateStore, StoreError};
pub use ui::{CartController, CartEvent, StorefrontView};
