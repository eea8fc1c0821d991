//! In-memory expense list, newest first.

use shared::{CategoryFilter, Expense, ExpenseId};
use std::collections::HashSet;
use thiserror::Error;

/// Why persisted data could not be turned into a store
#[derive(Debug, Error)]
pub enum LoadCorruption {
    #[error("persisted expenses are not a valid expense list: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("expense {id} is invalid: {reason}")]
    InvalidRecord { id: ExpenseId, reason: &'static str },
    #[error("expense id {0} appears more than once")]
    DuplicateId(ExpenseId),
}

/// Ordered sequence of expenses; index 0 is the most recently added
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records in store order, rejecting data that breaks
    /// the expense invariants (positive finite amount, non-empty description,
    /// unique ids).
    pub fn from_records(expenses: Vec<Expense>) -> Result<Self, LoadCorruption> {
        let mut seen = HashSet::with_capacity(expenses.len());
        for expense in &expenses {
            if !expense.amount.is_finite() || expense.amount <= 0.0 {
                return Err(LoadCorruption::InvalidRecord {
                    id: expense.id,
                    reason: "amount must be a positive number",
                });
            }
            if expense.description.trim().is_empty() {
                return Err(LoadCorruption::InvalidRecord {
                    id: expense.id,
                    reason: "description is empty",
                });
            }
            if !seen.insert(expense.id) {
                return Err(LoadCorruption::DuplicateId(expense.id));
            }
        }
        Ok(Self { expenses })
    }

    /// Prepend an expense. The caller supplies a fresh id.
    pub fn add(&mut self, expense: Expense) {
        self.expenses.insert(0, expense);
    }

    /// Remove the expense with `id`. Returns false (and changes nothing) when absent.
    pub fn delete(&mut self, id: ExpenseId) -> bool {
        match self.expenses.iter().position(|e| e.id == id) {
            Some(index) => {
                self.expenses.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove everything, returning how many expenses were dropped
    pub fn clear(&mut self) -> usize {
        let removed = self.expenses.len();
        self.expenses.clear();
        removed
    }

    /// Expenses matching `filter`, in store order
    pub fn filter_by_category<'a>(
        &'a self,
        filter: &'a CategoryFilter,
    ) -> impl Iterator<Item = &'a Expense> + 'a {
        self.expenses.iter().filter(move |e| filter.matches(e))
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn max_id(&self) -> Option<ExpenseId> {
        self.expenses.iter().map(|e| e.id).max()
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::expense;
    use shared::CategoryId;

    fn ids(store: &ExpenseStore) -> Vec<u64> {
        store.iter().map(|e| e.id.value()).collect()
    }

    #[test]
    fn test_add_prepends() {
        let mut store = ExpenseStore::new();
        store.add(expense(1, 10.0, "food"));
        store.add(expense(2, 20.0, "transport"));
        store.add(expense(3, 30.0, "food"));

        assert_eq!(ids(&store), vec![3, 2, 1]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_add_then_delete_restores_previous_state() {
        let mut store = ExpenseStore::new();
        store.add(expense(1, 10.0, "food"));
        store.add(expense(2, 20.0, "transport"));
        let before = store.clone();

        store.add(expense(3, 5.0, "other"));
        assert!(store.delete(ExpenseId(3)));
        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut store = ExpenseStore::new();
        store.add(expense(1, 10.0, "food"));
        let before = store.clone();

        assert!(!store.delete(ExpenseId(99)));
        assert_eq!(store, before);

        assert!(store.delete(ExpenseId(1)));
        assert!(!store.delete(ExpenseId(1)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut store = ExpenseStore::new();
        store.add(expense(1, 10.0, "food"));
        store.add(expense(2, 20.0, "food"));

        assert_eq!(store.clear(), 2);
        assert!(store.is_empty());
        assert_eq!(store.clear(), 0);
    }

    #[test]
    fn test_filter_by_category_preserves_order() {
        let mut store = ExpenseStore::new();
        store.add(expense(1, 100.0, "food"));
        store.add(expense(2, 50.0, "transport"));
        store.add(expense(3, 25.0, "food"));

        let food = CategoryFilter::Only(CategoryId::new("food"));
        let matched: Vec<u64> = store.filter_by_category(&food).map(|e| e.id.value()).collect();
        assert_eq!(matched, vec![3, 1]);

        let transport = CategoryFilter::Only(CategoryId::new("transport"));
        let matched: Vec<&Expense> = store.filter_by_category(&transport).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].amount, 50.0);

        let all = CategoryFilter::All;
        assert_eq!(store.filter_by_category(&all).count(), 3);

        let none = CategoryFilter::Only(CategoryId::new("utilities"));
        assert_eq!(store.filter_by_category(&none).count(), 0);
    }

    #[test]
    fn test_from_records_rejects_bad_data() {
        let negative = vec![expense(1, -5.0, "food")];
        assert!(matches!(
            ExpenseStore::from_records(negative),
            Err(LoadCorruption::InvalidRecord { .. })
        ));

        let mut blank = expense(1, 5.0, "food");
        blank.description = "   ".to_string();
        assert!(matches!(
            ExpenseStore::from_records(vec![blank]),
            Err(LoadCorruption::InvalidRecord { .. })
        ));

        let nan = vec![expense(1, f64::NAN, "food")];
        assert!(ExpenseStore::from_records(nan).is_err());

        let duplicate = vec![expense(7, 1.0, "food"), expense(7, 2.0, "other")];
        assert!(matches!(
            ExpenseStore::from_records(duplicate),
            Err(LoadCorruption::DuplicateId(ExpenseId(7)))
        ));
    }

    #[test]
    fn test_from_records_keeps_order() {
        let store = ExpenseStore::from_records(vec![
            expense(3, 1.0, "food"),
            expense(1, 2.0, "other"),
            expense(2, 3.0, "food"),
        ])
        .unwrap();

        assert_eq!(ids(&store), vec![3, 1, 2]);
        assert_eq!(store.max_id(), Some(ExpenseId(3)));
        assert_eq!(store.get(ExpenseId(1)).map(|e| e.amount), Some(2.0));
    }
}
