//! The shop aggregate injected into consumers.

use std::sync::Arc;

use crate::cart::CartStore;
use crate::config::ShopConfig;
use crate::error::StorageError;
use crate::storage::{JsonFileStorage, StorageBackend};
use crate::wishlist::WishlistStore;

/// The cart and wishlist behind a single storage backend.
///
/// Construct one `Shop` at application start and pass it to whatever layer
/// consumes it; there is no global instance. Construction performs the
/// one-time rehydration of both collections, and persist-on-every-write
/// substitutes for a teardown flush.
pub struct Shop {
    cart: CartStore,
    wishlist: WishlistStore,
}

impl Shop {
    /// Open file-backed storage per `config` and rehydrate both stores.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the data directory cannot be created.
    /// Rehydration itself never fails; malformed snapshots degrade to empty
    /// collections.
    pub fn init(config: &ShopConfig) -> Result<Self, StorageError> {
        let storage = Arc::new(JsonFileStorage::new(&config.data_dir)?);
        Ok(Self::with_storage(storage))
    }

    /// Build a shop over an explicit storage backend.
    #[must_use]
    pub fn with_storage(storage: Arc<dyn StorageBackend>) -> Self {
        let cart = CartStore::load(Arc::clone(&storage));
        let wishlist = WishlistStore::load(storage);
        Self { cart, wishlist }
    }

    /// The cart collection.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The cart collection, for mutation.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// The wishlist collection.
    #[must_use]
    pub fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    /// The wishlist collection, for mutation.
    pub fn wishlist_mut(&mut self) -> &mut WishlistStore {
        &mut self.wishlist
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use rust_decimal::Decimal;
    use toybasket_core::{Product, ProductId};

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: "Toy Drum".to_owned(),
            price: Decimal::from(30u32),
            images: Vec::new(),
            inner_qty: Some(4),
            bulk_pricing: Vec::new(),
        }
    }

    #[test]
    fn test_cart_and_wishlist_are_independent() {
        let mut shop = Shop::with_storage(Arc::new(MemoryStorage::new()));
        let p = product("p1");

        shop.cart_mut().add(&p, 2);
        shop.wishlist_mut().add(&p);

        shop.cart_mut().clear();

        assert!(shop.cart().is_empty());
        assert_eq!(shop.wishlist().count(), 1);
    }
}
