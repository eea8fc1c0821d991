//! # Domain Module
//!
//! Business logic for the expense tracker, independent of the UI and of the
//! storage backend.
//!
//! ## Module Organization
//!
//! - **validation**: acceptance rules for new expenses
//! - **expense_store**: the in-memory, newest-first expense list
//! - **summary_service**: total, count and top category
//! - **render**: pure mapping from state to the render model
//! - **expense_service**: the `ExpenseTracker` session object tying it together
//! - **clock**, **id_generator**, **notice**: time, ids and transient user messages
//!
//! ## Business Rules
//!
//! - Amounts are strictly positive; descriptions are non-empty after trimming
//! - Every expense has a date and a category from the configured catalog
//! - Ids are unique and increase with creation time
//! - Deleting and clearing need an explicit confirmation from the caller
//! - Summaries always cover the whole store, regardless of the list filter

pub mod clock;
pub mod expense_service;
pub mod expense_store;
pub mod id_generator;
pub mod notice;
pub mod render;
pub mod summary_service;
pub mod validation;

pub use clock::{Clock, ManualClock, SystemClock};
pub use expense_service::*;
pub use expense_store::{ExpenseStore, LoadCorruption};
pub use id_generator::IdGenerator;
pub use notice::Notice;
pub use render::render_model;
pub use summary_service::{category_totals, summarize};
pub use validation::{validate, validate_form, ValidatedExpense, ValidatedInput, ValidationError};
