//! Fresh Bowl Core - Shared domain types.
//!
//! This crate provides the common types used across the Fresh Bowl
//! storefront client:
//! - `storefront` - the widget library (API client, stores, cart UI)
//! - `cli` - terminal driver for the widget
//!
//! # Architecture
//!
//! The core crate contains only types and pure cart logic - no I/O, no
//! HTTP clients, no storage. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and statuses
//! - [`catalog`] - Products, categories, and ingredients
//! - [`cart`] - The cart state machine (lines, quantities, totals)
//! - [`orders`] - Remote order, payment, shipment, and notification records
//! - [`session`] - Users and the persisted session record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod orders;
pub mod session;
pub mod types;

pub use cart::{Cart, CartLine, Decremented};
pub use catalog::{Category, Ingredient, Product};
pub use orders::{Notification, Order, OrderDraft, Payment, PaymentDraft, Shipment};
pub use session::{SessionRecord, User};
pub use types::*;
