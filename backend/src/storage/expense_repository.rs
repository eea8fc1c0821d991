//! Persists the expense store to a single key-value slot as a JSON array.
//!
//! The array mirrors store order (newest first) and each element carries the
//! five expense fields. Loading never fails: a missing slot is an empty store,
//! and unreadable or corrupt data is logged and replaced by an empty store.

use shared::Expense;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::traits::{KeyValueStorage, StorageError};
use crate::domain::expense_store::{ExpenseStore, LoadCorruption};

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage is full, expenses were not saved")]
    QuotaExceeded,
    #[error("failed to serialize expenses: {0}")]
    SerializationFailure(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(StorageError),
}

impl From<StorageError> for PersistenceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::QuotaExceeded { .. } => PersistenceError::QuotaExceeded,
            other => PersistenceError::Storage(other),
        }
    }
}

/// Why a load fell back to an empty store
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("could not read the expense slot: {0}")]
    Unreadable(#[from] StorageError),
    #[error(transparent)]
    Corrupt(#[from] LoadCorruption),
}

/// Expense repository over any key-value backend
#[derive(Debug, Clone)]
pub struct ExpenseRepository<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> ExpenseRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Write the full store to the slot
    pub fn save(&mut self, store: &ExpenseStore) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(store.expenses())?;
        match self.storage.put_value(&self.key, &json) {
            Ok(()) => {
                debug!("Saved {} expenses to '{}'", store.len(), self.key);
                Ok(())
            }
            Err(e) => {
                error!("Error saving expenses to '{}': {}", self.key, e);
                Err(e.into())
            }
        }
    }

    /// Read the slot, distinguishing an absent slot (`Ok(None)`) from bad data
    pub fn try_load(&self) -> Result<Option<ExpenseStore>, LoadFailure> {
        let Some(json) = self.storage.get_value(&self.key)? else {
            return Ok(None);
        };
        let records: Vec<Expense> = serde_json::from_str(&json).map_err(LoadCorruption::from)?;
        let store = ExpenseStore::from_records(records)?;
        Ok(Some(store))
    }

    /// Read the slot, falling back to an empty store on any problem
    pub fn load(&self) -> ExpenseStore {
        match self.try_load() {
            Ok(Some(store)) => {
                info!("Loaded {} expenses from '{}'", store.len(), self.key);
                store
            }
            Ok(None) => {
                info!("No saved expenses under '{}', starting empty", self.key);
                ExpenseStore::new()
            }
            Err(e) => {
                warn!("Error loading expenses from '{}', starting empty: {}", self.key, e);
                ExpenseStore::new()
            }
        }
    }
}
