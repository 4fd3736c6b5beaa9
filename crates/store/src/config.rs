//! Shop configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TOYBASKET_DATA_DIR` - Directory for persisted snapshots (default: `.toybasket`)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".toybasket";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Shop configuration.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Directory the file-backed storage writes snapshots into.
    pub data_dir: PathBuf,
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw = get_env_or_default("TOYBASKET_DATA_DIR", DEFAULT_DATA_DIR);
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "TOYBASKET_DATA_DIR".to_owned(),
                "must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            data_dir: PathBuf::from(raw),
        })
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
