//! Core types for the Fresh Bowl client.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod status;

pub use id::*;
pub use price::{Currency, Price};
pub use status::*;
