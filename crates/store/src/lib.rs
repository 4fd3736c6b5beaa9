//! ToyBasket Store - Persisted shopper state.
//!
//! This crate owns the stateful half of the storefront core: the cart and
//! wishlist collections, their persistence to durable local key-value
//! storage, and the configuration that locates that storage.
//!
//! # Architecture
//!
//! UI layers construct a [`state::Shop`] once at startup (rehydrating both
//! collections from storage) and inject it into whatever consumes it. Every
//! mutation synchronously writes the full collection back to storage; there
//! is no explicit teardown flush. All derivation of prices and totals goes
//! through `toybasket_core::pricing`.
//!
//! # Modules
//!
//! - [`storage`] - The durable key-value storage boundary and its backends
//! - [`cart`] - The cart line-item collection
//! - [`wishlist`] - The liked-products collection
//! - [`config`] - Environment-driven configuration
//! - [`state`] - The injected `Shop` aggregate
//! - [`error`] - Storage error taxonomy

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;
pub mod wishlist;
