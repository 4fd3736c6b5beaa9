//! Storage error taxonomy.
//!
//! Store mutations themselves never surface errors to callers: rehydration
//! of a malformed snapshot degrades to an empty collection and a failed
//! persist is logged and swallowed. `StorageError` exists for the storage
//! boundary itself (backend construction, raw get/set) where callers can
//! still react.

use thiserror::Error;

/// Errors raised at the durable storage boundary.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
