//! Durable local key-value storage boundary.
//!
//! The stores persist each collection as a JSON array under a fixed string
//! key, mirroring the browser localStorage contract the storefront UI runs
//! against: string keys, string values, last writer wins. Backends implement
//! [`StorageBackend`]; production uses [`JsonFileStorage`], tests use
//! [`MemoryStorage`].
//!
//! There is no schema versioning. A snapshot that fails to parse degrades to
//! an empty collection instead of failing rehydration.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

mod json_file;
mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

/// Fixed snapshot keys, one per persisted collection.
pub mod keys {
    /// Key holding the serialized cart collection.
    pub const CART: &str = "cart";
    /// Key holding the serialized wishlist collection.
    pub const WISHLIST: &str = "wishlist";
}

/// A durable string-keyed, string-valued storage backend.
///
/// Writes are synchronous and idempotent. Concurrent processes sharing the
/// same backend race with last-writer-wins semantics; no cross-process
/// synchronization is provided.
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`, a no-op if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the delete fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Rehydrate the collection stored under `key`.
///
/// Absent, unreadable, or malformed snapshots all degrade to an empty
/// collection; degradation is logged, never surfaced.
pub(crate) fn read_snapshot<T: DeserializeOwned>(
    storage: &dyn StorageBackend,
    key: &str,
) -> Vec<T> {
    match storage.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(key, error = %e, "malformed snapshot, starting empty");
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read snapshot, starting empty");
            Vec::new()
        }
    }
}

/// Serialize `items` under `key`, logging (not surfacing) any failure.
pub(crate) fn write_snapshot<T: Serialize>(storage: &dyn StorageBackend, key: &str, items: &[T]) {
    let result = serde_json::to_string(items)
        .map_err(StorageError::from)
        .and_then(|json| storage.set(key, &json));

    if let Err(e) = result {
        tracing::warn!(key, error = %e, "failed to persist snapshot");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_snapshot_absent_key() {
        let storage = MemoryStorage::new();
        let items: Vec<u32> = read_snapshot(&storage, keys::CART);
        assert!(items.is_empty());
    }

    #[test]
    fn test_read_snapshot_malformed_degrades_to_empty() {
        let storage = MemoryStorage::new();
        storage.set(keys::CART, "{not json").unwrap();

        let items: Vec<u32> = read_snapshot(&storage, keys::CART);
        assert!(items.is_empty());
    }

    #[test]
    fn test_write_then_read_snapshot() {
        let storage = MemoryStorage::new();
        write_snapshot(&storage, keys::WISHLIST, &[1u32, 2, 3]);

        let items: Vec<u32> = read_snapshot(&storage, keys::WISHLIST);
        assert_eq!(items, vec![1, 2, 3]);
    }
}
