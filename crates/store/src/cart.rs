//! The persisted cart collection.
//!
//! The cart holds at most one line per product id; quantities count inner
//! packs, not pieces. Every mutation rewrites the full snapshot under the
//! `cart` storage key, and construction rehydrates from that key.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use toybasket_core::pricing::{self, Totals};
use toybasket_core::{Product, ProductId};

use crate::storage::{self, StorageBackend, keys};

/// A cart line item: a product snapshot plus an ordered quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product as it looked when the line was created.
    pub product: Product,
    /// First catalog image at add time, denormalized for display.
    pub image: Option<String>,
    /// Ordered quantity in inner packs.
    pub quantity: u32,
    /// When the line was first added.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    fn new(product: &Product, quantity: u32) -> Self {
        Self {
            image: product.first_image().map(str::to_owned),
            product: product.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Full pricing breakdown for this line at its current quantity.
    #[must_use]
    pub fn totals(&self) -> Totals {
        pricing::totals(&self.product, self.quantity)
    }

    /// Line total in currency units.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.totals().total_price
    }
}

/// The authoritative, persisted cart.
///
/// Mutations are synchronous; each one writes the full collection back to
/// storage before returning. Persistence failures are logged and swallowed,
/// so callers never observe an error from a cart operation.
pub struct CartStore {
    storage: Arc<dyn StorageBackend>,
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Construct the cart, rehydrating from the `cart` storage key.
    ///
    /// An absent or malformed snapshot yields an empty cart.
    #[must_use]
    pub fn load(storage: Arc<dyn StorageBackend>) -> Self {
        let lines = storage::read_snapshot(storage.as_ref(), keys::CART);
        Self { storage, lines }
    }

    /// Add `quantity` inner packs of `product`.
    ///
    /// Merges into the existing line for the same product id, otherwise
    /// appends a new line with the first catalog image denormalized.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if let Some(line) = self.line_mut(&product.id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine::new(product, quantity));
        }
        self.persist();
    }

    /// Set the line for `product` to exactly `quantity` inner packs.
    ///
    /// Zero removes the line; a quantity for a product not yet in the cart
    /// inserts a new line.
    pub fn set_quantity(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            self.lines.retain(|line| line.product.id != product.id);
        } else if let Some(line) = self.line_mut(&product.id) {
            line.quantity = quantity;
        } else {
            self.lines.push(CartLine::new(product, quantity));
        }
        self.persist();
    }

    /// Remove the line for `id`, a no-op if absent.
    pub fn remove(&mut self, id: &ProductId) {
        self.lines.retain(|line| &line.product.id != id);
        self.persist();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total ordered quantity across all lines, in inner packs.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line totals in currency units.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::total_price).sum()
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| &line.product.id == id)
    }

    fn persist(&self) {
        storage::write_snapshot(self.storage.as_ref(), keys::CART, &self.lines);
    }
}
