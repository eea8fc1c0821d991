//! # Expense Tracker Backend
//!
//! All non-UI logic for the single-user expense tracker.
//!
//! ## Architecture
//!
//! ```text
//! Presentation layer (browser UI)
//!     ↓  ExpenseForm, CategoryFilter, Confirmation
//! Domain layer (ExpenseTracker, validation, summaries, render model)
//!     ↓
//! Storage layer (ExpenseRepository over a KeyValueStorage)
//! ```
//!
//! On startup the tracker loads the saved list; each user action validates,
//! mutates the in-memory store, saves, and the UI redraws from
//! [`ExpenseTracker::render_model`]. Nothing here is global: every session is
//! an owned `ExpenseTracker` value.

pub mod config;
pub mod domain;
pub mod storage;

#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

pub use domain::{Confirmation, ExpenseTracker, TrackerError, ValidationError};
pub use storage::{ExpenseRepository, KeyValueStorage, PersistenceError, StorageError};
