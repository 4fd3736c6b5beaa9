//! Cart inspection and management commands.
//!
//! # Usage
//!
//! ```bash
//! tb-cli cart show
//! tb-cli cart remove -i <product-id>
//! tb-cli cart clear
//! ```
//!
//! # Environment Variables
//!
//! - `TOYBASKET_DATA_DIR` - Directory holding the persisted snapshots

use toybasket_core::ProductId;

use super::{CommandError, open_shop};

/// Show all cart lines with their derived totals.
pub fn show() -> Result<(), CommandError> {
    let shop = open_shop()?;
    let cart = shop.cart();

    if cart.is_empty() {
        tracing::info!("Cart is empty");
        return Ok(());
    }

    for line in cart.lines() {
        let totals = line.totals();
        tracing::info!(
            "{} [{}]: {} inners x {} pieces @ {} = {}",
            line.product.name,
            line.product.id,
            line.quantity,
            totals.pieces_per_inner,
            totals.unit_price,
            totals.total_price,
        );
    }
    tracing::info!(
        "Total: {} inners, subtotal {}",
        cart.count(),
        cart.subtotal()
    );
    Ok(())
}

/// Remove one cart line by product id.
pub fn remove(id: &str) -> Result<(), CommandError> {
    let mut shop = open_shop()?;
    let id = ProductId::new(id);

    if !shop.cart().lines().iter().any(|line| line.product.id == id) {
        tracing::warn!("No cart line for product {id}");
        return Ok(());
    }

    shop.cart_mut().remove(&id);
    tracing::info!("Removed product {id} from cart");
    Ok(())
}

/// Empty the cart.
pub fn clear() -> Result<(), CommandError> {
    let mut shop = open_shop()?;
    let removed = shop.cart().lines().len();
    shop.cart_mut().clear();
    tracing::info!("Cleared cart ({removed} lines removed)");
    Ok(())
}
