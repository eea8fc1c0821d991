//! # Storage Module
//!
//! Persistence for the expense tracker.
//!
//! The whole expense list lives in one named slot of a string key-value store.
//! [`KeyValueStorage`] abstracts the store so the domain layer does not care
//! whether the slot is the browser's `localStorage`, a file in a data
//! directory, or an in-memory map in tests.
//!
//! ## Backends
//!
//! - **BrowserStorage**: `localStorage` via `web-sys` (wasm32 only)
//! - **FileStorage**: one JSON file per key, written atomically
//! - **MemoryStorage**: in-process map with an optional quota
//!
//! [`ExpenseRepository`] layers the expense JSON format and the
//! fall-back-to-empty load policy on top of any backend.

pub mod expense_repository;
pub mod file;
pub mod memory;
pub mod traits;

#[cfg(target_arch = "wasm32")]
pub mod browser;

#[cfg(test)]
pub mod test_utils;

pub use expense_repository::{ExpenseRepository, LoadFailure, PersistenceError};
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use traits::{KeyValueStorage, StorageError};

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;
