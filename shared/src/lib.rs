use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a recorded expense.
///
/// Derived from the creation time in epoch milliseconds and unique within a store.
/// Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(pub u64);

impl ExpenseId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category tag of an expense, e.g. "food" or "transport".
///
/// The set of valid ids lives in the category catalog of [`TrackerConfig`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single recorded spending event.
///
/// This is also the persisted record layout: `{ id, amount, description, category, date }`
/// with the date as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    /// Amount in currency units, always greater than zero
    pub amount: f64,
    /// Trimmed, non-empty description
    pub description: String,
    pub category: CategoryId,
    /// Calendar date of the expense (no time of day)
    pub date: NaiveDate,
}

/// Raw form field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseForm {
    pub amount: String,
    pub description: String,
    pub category: String,
    /// ISO `YYYY-MM-DD`, empty when no date was picked
    pub date: String,
}

/// Category filter applied to the visible expense list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every expense is visible
    #[default]
    All,
    /// Only expenses of this category are visible
    Only(CategoryId),
}

impl CategoryFilter {
    pub const ALL: &'static str = "all";

    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => &expense.category == category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(CategoryFilterError::Empty),
            Self::ALL => Ok(CategoryFilter::All),
            other => Ok(CategoryFilter::Only(CategoryId::new(other))),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(Self::ALL),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilterError {
    Empty,
}

impl fmt::Display for CategoryFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilterError::Empty => write!(f, "Category filter cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryFilterError {}

/// Aggregate statistics over the whole store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total: f64,
    pub count: usize,
    /// Category with the greatest summed amount, `None` for an empty store
    pub top_category: Option<CategoryId>,
}

/// Summed amount for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: CategoryId,
    pub total: f64,
}

/// One entry of the category catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub id: CategoryId,
    /// Display label, e.g. "🍔 Food"
    pub label: String,
}

impl CategoryOption {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: CategoryId::new(id),
            label: label.to_string(),
        }
    }

    /// Leading token of the label (the emoji for the default catalog)
    pub fn badge(&self) -> &str {
        self.label.split_whitespace().next().unwrap_or(self.id.as_str())
    }
}

/// Expense formatted for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRow {
    pub id: ExpenseId,
    pub formatted_amount: String,
    pub description: String,
    pub category: CategoryId,
    pub category_label: String,
    pub formatted_date: String,
    pub raw_amount: f64,
}

/// Summary formatted for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryView {
    pub formatted_total: String,
    pub count: usize,
    /// Badge of the top category, "-" when there are no expenses
    pub top_category_badge: String,
}

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderModel {
    pub filter: String,
    pub rows: Vec<ExpenseRow>,
    /// Set when `rows` is empty
    pub empty_message: Option<String>,
    pub summary: SummaryView,
    /// Currently visible user notice (validation or save failure)
    pub notice: Option<String>,
}

/// Tracker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Key of the durable slot holding the expense list
    pub storage_key: String,
    /// How long a notice stays visible
    pub notice_duration_ms: u64,
    pub currency_symbol: String,
    /// Category preselected in a blank form
    pub default_category: CategoryId,
    pub categories: Vec<CategoryOption>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: "expenses".to_string(),
            notice_duration_ms: 3000,
            currency_symbol: "₹".to_string(),
            default_category: CategoryId::new("food"),
            categories: vec![
                CategoryOption::new("food", "🍔 Food"),
                CategoryOption::new("transport", "🚗 Transport"),
                CategoryOption::new("entertainment", "🎬 Entertainment"),
                CategoryOption::new("utilities", "💡 Utilities"),
                CategoryOption::new("other", "📦 Other"),
            ],
        }
    }
}

impl TrackerConfig {
    /// Parse a (possibly partial) JSON config; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn category(&self, id: &CategoryId) -> Option<&CategoryOption> {
        self.categories.iter().find(|option| &option.id == id)
    }

    pub fn has_category(&self, id: &CategoryId) -> bool {
        self.category(id).is_some()
    }

    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }
}
