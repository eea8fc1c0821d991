//! Acceptance rules for new expenses.
//!
//! Rules run in order and stop at the first failure:
//! 1. the amount parses as a number greater than zero,
//! 2. the trimmed description is non-empty,
//! 3. a date was supplied.
//!
//! There is no upper bound on the amount and no restriction on the date range.

use chrono::NaiveDate;
use shared::{CategoryId, ExpenseForm, TrackerConfig};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Amount must be a number greater than 0")]
    InvalidAmount,
    #[error("Description cannot be empty")]
    MissingDescription,
    #[error("Date is required")]
    MissingDate,
    #[error("Date must be in YYYY-MM-DD format")]
    InvalidDate,
    #[error("Category is not in the category list")]
    UnknownCategory,
}

impl ValidationError {
    /// Message shown to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::InvalidAmount => "Please enter a valid amount greater than 0",
            ValidationError::MissingDescription => "Please enter a description",
            ValidationError::MissingDate => "Please select a date",
            ValidationError::InvalidDate => "Please select a valid date",
            ValidationError::UnknownCategory => "Please choose a category from the list",
        }
    }
}

/// Field values that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub amount: f64,
    /// Already trimmed
    pub description: String,
    pub date: NaiveDate,
}

/// Validated input plus a category checked against the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedExpense {
    pub input: ValidatedInput,
    pub category: CategoryId,
}

pub fn validate(
    raw_amount: &str,
    raw_description: &str,
    raw_date: &str,
) -> Result<ValidatedInput, ValidationError> {
    let amount = parse_amount(raw_amount)?;

    let description = raw_description.trim();
    if description.is_empty() {
        return Err(ValidationError::MissingDescription);
    }

    let raw_date = raw_date.trim();
    if raw_date.is_empty() {
        return Err(ValidationError::MissingDate);
    }
    let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate)?;

    Ok(ValidatedInput {
        amount,
        description: description.to_string(),
        date,
    })
}

/// Validate a whole form, including category membership
pub fn validate_form(
    form: &ExpenseForm,
    config: &TrackerConfig,
) -> Result<ValidatedExpense, ValidationError> {
    let input = validate(&form.amount, &form.description, &form.date)?;

    let category = CategoryId::new(form.category.trim());
    if !config.has_category(&category) {
        return Err(ValidationError::UnknownCategory);
    }

    Ok(ValidatedExpense { input, category })
}

fn parse_amount(raw_amount: &str) -> Result<f64, ValidationError> {
    match raw_amount.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(ValidationError::InvalidAmount),
    }
}
