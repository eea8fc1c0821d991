use std::collections::HashMap;

use super::traits::{KeyValueStorage, StorageError};

/// In-process key-value store
///
/// An optional byte quota mimics the browser's storage limit: a write that would
/// push the summed length of all keys and values above it is rejected with
/// [`StorageError::QuotaExceeded`] and leaves the previous value in place.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            values: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Summed length of all stored keys and values
    pub fn used_bytes(&self) -> usize {
        self.values.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    fn entry_size(&self, key: &str) -> usize {
        self.values.get(key).map(|v| key.len() + v.len()).unwrap_or(0)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn put_value(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota_bytes {
            let projected = self.used_bytes() - self.entry_size(key) + key.len() + value.len();
            if projected > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                });
            }
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete_value(&mut self, key: &str) -> Result<bool, StorageError> {
        Ok(self.values.remove(key).is_some())
    }
}
