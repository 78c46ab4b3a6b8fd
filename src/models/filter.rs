//! Category filter for the transaction list

use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::Expense;

/// The active transaction filter: everything, or a single category
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Sentinel: no restriction
    #[default]
    All,
    /// Restrict to expenses whose category equals the given name
    Category(String),
}

impl CategoryFilter {
    /// Check whether an expense passes the filter
    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => expense.category == *name,
        }
    }

    /// True when this is the unrestricted sentinel
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Category(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn expense(category: &str) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            category,
            "somewhere",
            Money::from_cents(100),
        )
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(CategoryFilter::All.matches(&expense("Groceries")));
        assert!(CategoryFilter::All.matches(&expense("Housing")));
    }

    #[test]
    fn test_category_matches_exactly() {
        let filter = CategoryFilter::Category("Groceries".to_string());
        assert!(filter.matches(&expense("Groceries")));
        assert!(!filter.matches(&expense("Housing")));
        assert!(!filter.matches(&expense("groceries")));
    }

    #[test]
    fn test_display() {
        assert_eq!(CategoryFilter::All.to_string(), "All");
        assert_eq!(
            CategoryFilter::Category("Health".to_string()).to_string(),
            "Health"
        );
    }
}
