//! # Storage Traits
//!
//! The key-value abstraction behind the durable slot. The expense repository
//! only ever talks to this trait, so the browser's `localStorage`, a data
//! directory on disk and the in-memory test backend are interchangeable.

use thiserror::Error;

/// Failure reported by a key-value backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend refused the write because it is full
    #[error("storage quota exceeded while writing '{key}'")]
    QuotaExceeded { key: String },
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The backend is missing or rejected the operation for another reason
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Trait defining a string key-value store
///
/// Operations are synchronous: every backend completes a call before returning.
pub trait KeyValueStorage {
    /// Retrieve a value by its key, `None` when the key was never written
    fn get_value(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store a value, overwriting any existing value for the same key
    fn put_value(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value by its key
    /// Returns true if the key was present
    fn delete_value(&mut self, key: &str) -> Result<bool, StorageError>;
}
