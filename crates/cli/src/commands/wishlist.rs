//! Wishlist inspection and management commands.
//!
//! # Usage
//!
//! ```bash
//! tb-cli wishlist show
//! tb-cli wishlist remove -i <product-id>
//! ```
//!
//! # Environment Variables
//!
//! - `TOYBASKET_DATA_DIR` - Directory holding the persisted snapshots

use toybasket_core::ProductId;

use super::{CommandError, open_shop};

/// Show all wishlist entries.
pub fn show() -> Result<(), CommandError> {
    let shop = open_shop()?;
    let wishlist = shop.wishlist();

    if wishlist.is_empty() {
        tracing::info!("Wishlist is empty");
        return Ok(());
    }

    for entry in wishlist.entries() {
        tracing::info!(
            "{} [{}] @ {} (liked {})",
            entry.product.name,
            entry.product.id,
            entry.product.price,
            entry.added_at.format("%Y-%m-%d"),
        );
    }
    tracing::info!("Total: {} liked products", wishlist.count());
    Ok(())
}

/// Remove one wishlist entry by product id.
pub fn remove(id: &str) -> Result<(), CommandError> {
    let mut shop = open_shop()?;
    let id = ProductId::new(id);

    if !shop.wishlist().contains(&id) {
        tracing::warn!("No wishlist entry for product {id}");
        return Ok(());
    }

    shop.wishlist_mut().remove(&id);
    tracing::info!("Removed product {id} from wishlist");
    Ok(())
}
