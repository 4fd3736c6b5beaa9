//! The persisted wishlist collection.
//!
//! A deduplicated set of liked products, keyed by product id, with no
//! quantities. Same persistence contract as the cart under its own
//! `wishlist` storage key.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use toybasket_core::{Product, ProductId};

use crate::storage::{self, StorageBackend, keys};

/// A wishlist entry: a product snapshot taken when it was liked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistEntry {
    /// The product as it looked when liked.
    pub product: Product,
    /// First catalog image at like time, denormalized for display.
    pub image: Option<String>,
    /// When the product was liked.
    pub added_at: DateTime<Utc>,
}

impl WishlistEntry {
    fn new(product: &Product) -> Self {
        Self {
            image: product.first_image().map(str::to_owned),
            product: product.clone(),
            added_at: Utc::now(),
        }
    }
}

/// The authoritative, persisted wishlist.
///
/// Mutations are synchronous and write the full collection back to storage
/// before returning; persistence failures are logged and swallowed.
pub struct WishlistStore {
    storage: Arc<dyn StorageBackend>,
    entries: Vec<WishlistEntry>,
}

impl WishlistStore {
    /// Construct the wishlist, rehydrating from the `wishlist` storage key.
    ///
    /// An absent or malformed snapshot yields an empty wishlist.
    #[must_use]
    pub fn load(storage: Arc<dyn StorageBackend>) -> Self {
        let entries = storage::read_snapshot(storage.as_ref(), keys::WISHLIST);
        Self { storage, entries }
    }

    /// Like `product`, a no-op if its id is already present.
    pub fn add(&mut self, product: &Product) {
        if !self.contains(&product.id) {
            self.entries.push(WishlistEntry::new(product));
        }
        self.persist();
    }

    /// Remove the entry for `id`, a no-op if absent.
    pub fn remove(&mut self, id: &ProductId) {
        self.entries.retain(|entry| &entry.product.id != id);
        self.persist();
    }

    /// Flip membership for `product`; returns whether it is now present.
    pub fn toggle(&mut self, product: &Product) -> bool {
        let liked = if self.contains(&product.id) {
            self.entries.retain(|entry| entry.product.id != product.id);
            false
        } else {
            self.entries.push(WishlistEntry::new(product));
            true
        };
        self.persist();
        liked
    }

    /// Whether `id` is in the wishlist.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.entries.iter().any(|entry| &entry.product.id == id)
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    /// Number of liked products.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the wishlist has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) {
        storage::write_snapshot(self.storage.as_ref(), keys::WISHLIST, &self.entries);
    }
}
