//! ToyBasket Core - Shared domain library.
//!
//! This crate provides the domain types and pricing logic used across all
//! ToyBasket components:
//! - `store` - Persisted cart and wishlist collections
//! - `cli` - Command-line tools for inspecting persisted state
//!
//! # Architecture
//!
//! The core crate contains only types and pure derivations - no I/O, no
//! storage access, no HTTP clients. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs and the catalog product data model
//! - [`pricing`] - Tiered bulk-pricing resolution

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pricing;
pub mod types;

pub use types::*;
