//! Integration tests for ToyBasket.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p toybasket-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - File-backed cart snapshot round-trips
//! - `wishlist_persistence` - File-backed wishlist snapshot round-trips
//! - `shop_lifecycle` - Whole-shop init/rehydrate behavior
//!
//! Unlike the per-crate unit tests, these exercise the real
//! `JsonFileStorage` backend against a temporary directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;
use toybasket_core::{BulkTier, Product, ProductId};

/// Build a catalog product with the standard three-tier wholesale ladder.
#[must_use]
pub fn tiered_product(id: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        price: Decimal::from(120u32),
        images: vec![format!("https://cdn.example.com/{id}.jpg")],
        inner_qty: None,
        bulk_pricing: vec![
            BulkTier {
                inner: 1,
                qty: 12,
                price: Some(Decimal::from(100u32)),
            },
            BulkTier {
                inner: 5,
                qty: 60,
                price: Some(Decimal::from(90u32)),
            },
            BulkTier {
                inner: 10,
                qty: 120,
                price: Some(Decimal::from(80u32)),
            },
        ],
    }
}

/// Build a minimal catalog product with no tiers or images.
#[must_use]
pub fn bare_product(id: &str, price: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        price: Decimal::from(price),
        images: Vec::new(),
        inner_qty: None,
        bulk_pricing: Vec::new(),
    }
}
