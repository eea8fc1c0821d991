//! Pure mapping from tracker state to what the presentation layer draws.

use chrono::NaiveDate;
use shared::{CategoryFilter, Expense, ExpenseRow, RenderModel, SummaryView, TrackerConfig};

use super::expense_store::ExpenseStore;
use super::summary_service::summarize;

pub const EMPTY_STORE_MESSAGE: &str = "No expenses yet. Add your first expense!";
pub const EMPTY_FILTER_MESSAGE: &str = "No expenses in this category";
const NO_TOP_CATEGORY: &str = "-";

/// Indian-English short date, e.g. "5 Mar 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

pub fn expense_row(expense: &Expense, config: &TrackerConfig) -> ExpenseRow {
    let category_label = config
        .category(&expense.category)
        .map(|option| option.label.clone())
        .unwrap_or_else(|| expense.category.to_string());

    ExpenseRow {
        id: expense.id,
        formatted_amount: config.format_amount(expense.amount),
        description: expense.description.clone(),
        category: expense.category.clone(),
        category_label,
        formatted_date: format_date(expense.date),
        raw_amount: expense.amount,
    }
}

pub fn summary_view(store: &ExpenseStore, config: &TrackerConfig) -> SummaryView {
    let summary = summarize(store);
    let top_category_badge = match &summary.top_category {
        Some(category) => config
            .category(category)
            .map(|option| option.badge().to_string())
            .unwrap_or_else(|| category.to_string()),
        None => NO_TOP_CATEGORY.to_string(),
    };

    SummaryView {
        formatted_total: config.format_amount(summary.total),
        count: summary.count,
        top_category_badge,
    }
}

pub fn render_model(
    store: &ExpenseStore,
    filter: &CategoryFilter,
    config: &TrackerConfig,
    notice: Option<&str>,
) -> RenderModel {
    let rows: Vec<ExpenseRow> = store
        .filter_by_category(filter)
        .map(|expense| expense_row(expense, config))
        .collect();

    let empty_message = if rows.is_empty() {
        let message = if filter.is_all() {
            EMPTY_STORE_MESSAGE
        } else {
            EMPTY_FILTER_MESSAGE
        };
        Some(message.to_string())
    } else {
        None
    };

    RenderModel {
        filter: filter.to_string(),
        rows,
        empty_message,
        summary: summary_view(store, config),
        notice: notice.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::expense;
    use shared::CategoryId;

    fn sample_store() -> ExpenseStore {
        let mut store = ExpenseStore::new();
        store.add(expense(1, 100.0, "food"));
        store.add(expense(2, 50.0, "transport"));
        store
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()), "5 Mar 2024");
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2023, 12, 25).unwrap()), "25 Dec 2023");
    }

    #[test]
    fn test_rows_follow_filter() {
        let config = TrackerConfig::default();
        let store = sample_store();

        let model = render_model(&store, &CategoryFilter::All, &config, None);
        assert_eq!(model.filter, "all");
        assert_eq!(model.rows.len(), 2);
        assert_eq!(model.rows[0].category_label, "🚗 Transport");
        assert_eq!(model.rows[0].formatted_amount, "₹50.00");
        assert_eq!(model.rows[1].formatted_date, "5 Mar 2024");
        assert_eq!(model.empty_message, None);

        let transport = CategoryFilter::Only(CategoryId::new("transport"));
        let model = render_model(&store, &transport, &config, None);
        assert_eq!(model.rows.len(), 1);
        assert_eq!(model.rows[0].raw_amount, 50.0);
    }

    #[test]
    fn test_summary_is_whole_store_even_when_filtered() {
        let config = TrackerConfig::default();
        let store = sample_store();
        let food = CategoryFilter::Only(CategoryId::new("food"));

        let model = render_model(&store, &food, &config, None);
        assert_eq!(model.summary.formatted_total, "₹150.00");
        assert_eq!(model.summary.count, 2);
        assert_eq!(model.summary.top_category_badge, "🍔");
    }

    #[test]
    fn test_empty_messages() {
        let config = TrackerConfig::default();
        let empty = ExpenseStore::new();

        let model = render_model(&empty, &CategoryFilter::All, &config, None);
        assert_eq!(model.empty_message.as_deref(), Some(EMPTY_STORE_MESSAGE));
        assert_eq!(model.summary.top_category_badge, "-");
        assert_eq!(model.summary.formatted_total, "₹0.00");

        let utilities = CategoryFilter::Only(CategoryId::new("utilities"));
        let model = render_model(&sample_store(), &utilities, &config, None);
        assert_eq!(model.empty_message.as_deref(), Some(EMPTY_FILTER_MESSAGE));
    }

    #[test]
    fn test_unknown_category_falls_back_to_id() {
        let config = TrackerConfig::default();
        let mut store = ExpenseStore::new();
        store.add(expense(1, 10.0, "groceries"));

        let model = render_model(&store, &CategoryFilter::All, &config, Some("Saved"));
        assert_eq!(model.rows[0].category_label, "groceries");
        assert_eq!(model.summary.top_category_badge, "groceries");
        assert_eq!(model.notice.as_deref(), Some("Saved"));
    }
}
