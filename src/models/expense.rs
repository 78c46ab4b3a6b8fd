//! Expense model and quick-add validation
//!
//! An expense is one recorded spend transaction. New expenses enter the system
//! only through [`ExpenseDraft::validate`], which turns raw form text into a
//! well-formed record or a field-level validation error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::ids::ExpenseId;
use super::money::Money;

/// A single recorded spend transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned at creation
    pub id: ExpenseId,

    /// Transaction date (no time-of-day)
    pub date: NaiveDate,

    /// Spending category. Drawn from the budget's category list by the UI,
    /// but not enforced by type.
    pub category: String,

    /// Where the money went
    pub merchant: String,

    /// Amount spent. Positive for any expense accepted via quick-add.
    pub amount: Money,

    /// Optional free-text annotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        merchant: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            category: category.into(),
            merchant: merchant.into(),
            amount,
            notes: None,
        }
    }

    /// Create a new expense with notes attached
    pub fn with_notes(
        date: NaiveDate,
        category: impl Into<String>,
        merchant: impl Into<String>,
        amount: Money,
        notes: impl Into<String>,
    ) -> Self {
        let mut expense = Self::new(date, category, merchant, amount);
        expense.notes = Some(notes.into());
        expense
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.merchant,
            self.amount
        )
    }
}

/// Raw quick-add form fields, all free-form text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub date: String,
    pub category: String,
    pub merchant: String,
    pub amount: String,
    pub notes: String,
}

impl ExpenseDraft {
    /// Validate the draft and produce a well-formed [`Expense`]
    ///
    /// All required fields must be non-empty after trimming, the date must be
    /// a calendar date in `YYYY-MM-DD` form, and the amount must parse as a
    /// finite decimal strictly greater than zero. On success the expense gets
    /// a fresh unique id, trimmed fields, and `notes: None` when the notes
    /// field was blank. A failed draft leaves no trace anywhere.
    pub fn validate(&self) -> Result<Expense, ValidationError> {
        let date = self.date.trim();
        let category = self.category.trim();
        let merchant = self.merchant.trim();
        let amount = self.amount.trim();
        let notes = self.notes.trim();

        if date.is_empty() {
            return Err(ValidationError::MissingField("date"));
        }
        if category.is_empty() {
            return Err(ValidationError::MissingField("category"));
        }
        if merchant.is_empty() {
            return Err(ValidationError::MissingField("merchant"));
        }
        if amount.is_empty() {
            return Err(ValidationError::MissingField("amount"));
        }

        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(date.to_string()))?;

        let amount = Money::parse(amount)
            .map_err(|_| ValidationError::NonNumericAmount(amount.to_string()))?;
        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount(amount));
        }

        let mut expense = Expense::new(date, category, merchant, amount);
        if !notes.is_empty() {
            expense.notes = Some(notes.to_string());
        }

        Ok(expense)
    }
}

/// Validation failures for the quick-add form
///
/// All are recoverable and local: they block the append and leave the store
/// and summary unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty after trimming
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The date field did not parse as a calendar date
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The amount field did not parse as a finite decimal number
    #[error("amount '{0}' is not a number")]
    NonNumericAmount(String),

    /// The amount parsed but was zero or negative
    #[error("amount must be greater than zero, got {0}")]
    NonPositiveAmount(Money),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ExpenseDraft {
        ExpenseDraft {
            date: "2024-05-01".to_string(),
            category: "Groceries".to_string(),
            merchant: "Co-op".to_string(),
            amount: "12.50".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_valid_draft_accepted() {
        let expense = valid_draft().validate().unwrap();
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(expense.category, "Groceries");
        assert_eq!(expense.merchant, "Co-op");
        assert_eq!(expense.amount, Money::from_cents(1250));
        assert_eq!(expense.notes, None);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut draft = valid_draft();
        draft.merchant = "  Co-op  ".to_string();
        draft.notes = "  weekly run  ".to_string();

        let expense = draft.validate().unwrap();
        assert_eq!(expense.merchant, "Co-op");
        assert_eq!(expense.notes.as_deref(), Some("weekly run"));
    }

    #[test]
    fn test_empty_merchant_rejected() {
        let mut draft = valid_draft();
        draft.merchant = "   ".to_string();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("merchant"))
        );
    }

    #[test]
    fn test_every_required_field_checked() {
        let mut draft = valid_draft();
        draft.date.clear();
        assert_eq!(draft.validate(), Err(ValidationError::MissingField("date")));

        let mut draft = valid_draft();
        draft.category.clear();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("category"))
        );

        let mut draft = valid_draft();
        draft.merchant.clear();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("merchant"))
        );

        let mut draft = valid_draft();
        draft.amount.clear();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("amount"))
        );
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        let mut draft = valid_draft();
        draft.amount = "abc".to_string();
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::NonNumericAmount(_))
        ));
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        for amount in ["-5", "0", "0.00"] {
            let mut draft = valid_draft();
            draft.amount = amount.to_string();
            assert!(
                matches!(draft.validate(), Err(ValidationError::NonPositiveAmount(_))),
                "amount {:?} should be rejected",
                amount
            );
        }
    }

    #[test]
    fn test_garbage_date_rejected() {
        let mut draft = valid_draft();
        draft.date = "yesterday".to_string();
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_each_validation_gets_fresh_id() {
        let a = valid_draft().validate().unwrap();
        let b = valid_draft().validate().unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serialization_skips_empty_notes() {
        let expense = valid_draft().validate().unwrap();
        let json = serde_json::to_string(&expense).unwrap();
        assert!(!json.contains("notes"));

        let noted = Expense::with_notes(
            expense.date,
            "Groceries",
            "Co-op",
            expense.amount,
            "staples",
        );
        let json = serde_json::to_string(&noted).unwrap();
        assert!(json.contains("staples"));
    }
}
