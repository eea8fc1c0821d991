//! Browser `localStorage` backend (wasm32 only).

use tracing::warn;
use web_sys::Storage;

use super::traits::{KeyValueStorage, StorageError};

/// Key-value store over the page's `localStorage`
///
/// A page without a window, or with storage disabled, yields
/// [`StorageError::Unavailable`] instead of trapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn local_storage() -> Result<Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn put_value(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?.set_item(key, value).map_err(|e| {
            let detail = format!("{:?}", e);
            warn!("localStorage rejected write for '{}': {}", key, detail);
            // Browsers report a full store as a QuotaExceededError DOMException
            if detail.contains("Quota") {
                StorageError::QuotaExceeded {
                    key: key.to_string(),
                }
            } else {
                StorageError::Unavailable(detail)
            }
        })
    }

    fn delete_value(&mut self, key: &str) -> Result<bool, StorageError> {
        let storage = Self::local_storage()?;
        let existed = storage
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .is_some();
        storage
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?;
        Ok(existed)
    }
}
