//! Expense tracker service: the single owned state object the presentation
//! layer drives.
//!
//! Every mutation follows the same path: validate (for adds), mutate the
//! store, save, then the caller re-renders from [`ExpenseTracker::render_model`].
//! A failed save is reported but never rolls back the in-memory change.

use chrono::Duration;
use shared::{
    CategoryFilter, CategoryTotal, Expense, ExpenseForm, ExpenseId, RenderModel, Summary,
    TrackerConfig,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::clock::{Clock, SystemClock};
use super::expense_store::ExpenseStore;
use super::id_generator::IdGenerator;
use super::notice::Notice;
use super::render;
use super::summary_service;
use super::validation::{validate_form, ValidationError};
use crate::storage::{ExpenseRepository, KeyValueStorage, PersistenceError};

pub const SAVE_FAILED_MESSAGE: &str = "Failed to save data. Storage might be full.";
pub const NOTHING_TO_CLEAR_MESSAGE: &str = "No expenses to clear";

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("there are no expenses to clear")]
    NothingToClear,
}

/// The caller's answer to "are you sure?" for destructive actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

/// Result of a mutation that has been applied in memory
#[derive(Debug)]
pub struct Committed<T> {
    pub value: T,
    /// Set when the change could not be written to storage
    pub save_error: Option<PersistenceError>,
}

impl<T> Committed<T> {
    fn untouched(value: T) -> Self {
        Self {
            value,
            save_error: None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.save_error.is_none()
    }
}

pub struct ExpenseTracker<S: KeyValueStorage> {
    store: ExpenseStore,
    repository: ExpenseRepository<S>,
    filter: CategoryFilter,
    config: TrackerConfig,
    clock: Box<dyn Clock>,
    ids: IdGenerator,
    notice: Option<Notice>,
}

impl<S: KeyValueStorage> ExpenseTracker<S> {
    /// Load saved expenses from `storage` and start a session
    pub fn open(storage: S, config: TrackerConfig) -> Self {
        Self::with_clock(storage, config, SystemClock)
    }

    pub fn with_clock(storage: S, config: TrackerConfig, clock: impl Clock + 'static) -> Self {
        let repository = ExpenseRepository::new(storage, config.storage_key.clone());
        let store = repository.load();
        let ids = IdGenerator::starting_after(store.max_id());

        Self {
            store,
            repository,
            filter: CategoryFilter::All,
            config,
            clock: Box::new(clock),
            ids,
            notice: None,
        }
    }

    /// Validate the form and record a new expense at the top of the list
    pub fn add_expense(&mut self, form: &ExpenseForm) -> Result<Committed<Expense>, TrackerError> {
        let validated = match validate_form(form, &self.config) {
            Ok(validated) => validated,
            Err(e) => {
                debug!("Rejected expense form: {}", e);
                self.raise_notice(e.user_message());
                return Err(e.into());
            }
        };

        let expense = Expense {
            id: self.ids.next_id(self.clock.now_millis()),
            amount: validated.input.amount,
            description: validated.input.description,
            category: validated.category,
            date: validated.input.date,
        };
        info!(
            "Adding expense {}: {} in {}",
            expense.id,
            self.config.format_amount(expense.amount),
            expense.category
        );

        self.store.add(expense.clone());
        let save_error = self.persist();
        Ok(Committed {
            value: expense,
            save_error,
        })
    }

    /// Delete one expense once the user has confirmed.
    ///
    /// The value is true when an expense was removed; an unknown id is not an error.
    pub fn delete_expense(&mut self, id: ExpenseId, confirmation: Confirmation) -> Committed<bool> {
        if confirmation == Confirmation::Declined {
            debug!("Delete of expense {} declined", id);
            return Committed::untouched(false);
        }

        if !self.store.delete(id) {
            debug!("Expense {} not found, nothing deleted", id);
            return Committed::untouched(false);
        }

        info!("Deleted expense {}", id);
        let save_error = self.persist();
        Committed {
            value: true,
            save_error,
        }
    }

    /// Delete every expense once the user has confirmed.
    ///
    /// An empty list is reported before the confirmation is considered.
    pub fn clear_all(&mut self, confirmation: Confirmation) -> Result<Committed<usize>, TrackerError> {
        if self.store.is_empty() {
            self.raise_notice(NOTHING_TO_CLEAR_MESSAGE);
            return Err(TrackerError::NothingToClear);
        }

        if confirmation == Confirmation::Declined {
            debug!("Clear all declined");
            return Ok(Committed::untouched(0));
        }

        let removed = self.store.clear();
        info!("Cleared {} expenses", removed);
        let save_error = self.persist();
        Ok(Committed {
            value: removed,
            save_error,
        })
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn render_model(&self) -> RenderModel {
        render::render_model(&self.store, &self.filter, &self.config, self.visible_notice())
    }

    pub fn summary(&self) -> Summary {
        summary_service::summarize(&self.store)
    }

    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        summary_service::category_totals(&self.store)
    }

    /// Form state after a reset: default category and today's date
    pub fn blank_form(&self) -> ExpenseForm {
        ExpenseForm {
            amount: String::new(),
            description: String::new(),
            category: self.config.default_category.to_string(),
            date: self.clock.today().format("%Y-%m-%d").to_string(),
        }
    }

    /// The current notice, while it has not expired
    pub fn visible_notice(&self) -> Option<&str> {
        let now = self.clock.now();
        let lifetime = self.notice_lifetime();
        self.notice
            .as_ref()
            .filter(|notice| notice.is_visible_at(now, lifetime))
            .map(|notice| notice.message.as_str())
    }

    /// Drop the notice once it has expired
    pub fn dismiss_expired(&mut self) {
        if self.notice.is_some() && self.visible_notice().is_none() {
            self.notice = None;
        }
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    pub fn expenses(&self) -> &[Expense] {
        self.store.expenses()
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        self.repository.storage()
    }

    fn persist(&mut self) -> Option<PersistenceError> {
        match self.repository.save(&self.store) {
            Ok(()) => None,
            Err(e) => {
                warn!("Keeping unsaved changes in memory: {}", e);
                self.raise_notice(SAVE_FAILED_MESSAGE);
                Some(e)
            }
        }
    }

    fn raise_notice(&mut self, message: &str) {
        self.notice = Some(Notice::new(message, self.clock.now()));
    }

    fn notice_lifetime(&self) -> Duration {
        let millis = self.config.notice_duration_ms.min(u64::from(u32::MAX));
        Duration::milliseconds(millis as i64)
    }
}
