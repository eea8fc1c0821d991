//! Summary statistics over the whole store.
//!
//! Everything is recomputed from the store on each call; nothing is cached.

use shared::{CategoryId, CategoryTotal, Summary};
use std::collections::BTreeMap;

use super::expense_store::ExpenseStore;

/// Summed amount per category, largest first.
///
/// Equal totals are ordered by ascending category id so the result does not
/// depend on insertion order.
pub fn category_totals(store: &ExpenseStore) -> Vec<CategoryTotal> {
    let mut sums: BTreeMap<&CategoryId, f64> = BTreeMap::new();
    for expense in store.iter() {
        *sums.entry(&expense.category).or_insert(0.0) += expense.amount;
    }

    let mut totals: Vec<CategoryTotal> = sums
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.clone(),
            total,
        })
        .collect();
    // BTreeMap already yields ids ascending; a stable sort keeps that order on ties
    totals.sort_by(|a, b| b.total.total_cmp(&a.total));
    totals
}

pub fn summarize(store: &ExpenseStore) -> Summary {
    // Start from +0.0; an empty f64 sum is -0.0 and would render as "-0.00"
    let total = store.iter().fold(0.0, |sum, e| sum + e.amount);
    let top_category = category_totals(store)
        .into_iter()
        .next()
        .map(|entry| entry.category);

    Summary {
        total,
        count: store.len(),
        top_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::expense;

    #[test]
    fn test_empty_store() {
        let summary = summarize(&ExpenseStore::new());
        assert_eq!(summary.total, 0.0);
        assert!(!summary.total.is_sign_negative());
        assert_eq!(summary.count, 0);
        assert_eq!(summary.top_category, None);
        assert!(category_totals(&ExpenseStore::new()).is_empty());
    }

    #[test]
    fn test_food_beats_transport() {
        let mut store = ExpenseStore::new();
        store.add(expense(1, 100.0, "food"));
        store.add(expense(2, 50.0, "transport"));

        let summary = summarize(&store);
        assert_eq!(summary.total, 150.0);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.top_category, Some(CategoryId::new("food")));
    }

    #[test]
    fn test_sums_across_records() {
        let mut store = ExpenseStore::new();
        store.add(expense(1, 30.0, "food"));
        store.add(expense(2, 50.0, "transport"));
        store.add(expense(3, 30.0, "food"));

        let totals = category_totals(&store);
        assert_eq!(
            totals,
            vec![
                CategoryTotal { category: CategoryId::new("food"), total: 60.0 },
                CategoryTotal { category: CategoryId::new("transport"), total: 50.0 },
            ]
        );
        assert_eq!(summarize(&store).top_category, Some(CategoryId::new("food")));
    }

    #[test]
    fn test_tie_breaks_by_category_id() {
        let mut store = ExpenseStore::new();
        store.add(expense(1, 40.0, "utilities"));
        store.add(expense(2, 40.0, "entertainment"));
        store.add(expense(3, 10.0, "food"));

        assert_eq!(
            summarize(&store).top_category,
            Some(CategoryId::new("entertainment"))
        );

        // Same data, different insertion order
        let mut reversed = ExpenseStore::new();
        reversed.add(expense(2, 40.0, "entertainment"));
        reversed.add(expense(1, 40.0, "utilities"));
        reversed.add(expense(3, 10.0, "food"));
        assert_eq!(
            summarize(&reversed).top_category,
            Some(CategoryId::new("entertainment"))
        );
    }

    #[test]
    fn test_summary_covers_whole_store() {
        let mut store = ExpenseStore::new();
        store.add(expense(1, 1.25, "other"));
        store.add(expense(2, 2.5, "food"));
        store.add(expense(3, 3.75, "transport"));

        let summary = summarize(&store);
        assert_eq!(summary.total, 7.5);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.top_category, Some(CategoryId::new("transport")));
    }
}
