//! CLI command implementations.

use thiserror::Error;
use toybasket_store::config::{ConfigError, ShopConfig};
use toybasket_store::error::StorageError;
use toybasket_store::state::Shop;

pub mod cart;
pub mod wishlist;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Storage could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Open the shop over the configured data directory.
pub(crate) fn open_shop() -> Result<Shop, CommandError> {
    let config = ShopConfig::from_env()?;
    tracing::debug!(data_dir = %config.data_dir.display(), "opening shop state");
    Ok(Shop::init(&config)?)
}
