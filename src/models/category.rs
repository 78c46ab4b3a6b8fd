//! Budget categories
//!
//! The monthly budget is an explicit ordered list of category definitions,
//! each pairing a name with its allocated ceiling, plus one overall total.
//! The list is the single source of truth for valid category values and for
//! display order.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// One spending bucket with a monthly allocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBudget {
    /// Category name
    pub name: String,

    /// Allocated ceiling for the current month
    pub allocated: Money,
}

impl CategoryBudget {
    /// Create a new category budget
    pub fn new(name: impl Into<String>, allocated: Money) -> Self {
        Self {
            name: name.into(),
            allocated,
        }
    }
}

impl fmt::Display for CategoryBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.allocated)
    }
}

/// The monthly budget: ordered category allocations plus an overall ceiling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBudget {
    /// Overall monthly ceiling
    pub total: Money,

    /// Category allocations in display order
    pub categories: Vec<CategoryBudget>,
}

impl MonthlyBudget {
    /// Create a budget from an overall total and ordered allocations
    pub fn new(total: Money, categories: Vec<CategoryBudget>) -> Self {
        Self { total, categories }
    }

    /// Iterate category names in display order
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Look up the allocation for a category by name
    pub fn allocated_for(&self, name: &str) -> Option<Money> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.allocated)
    }

    /// Check whether a name is one of the budget's categories
    pub fn contains(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    /// Share of the overall budget consumed, as a whole percentage
    ///
    /// Rounded to the nearest percent and capped at 999 so runaway spending
    /// does not blow out the display. A zero-total budget reads 0 when
    /// nothing is spent and 999 otherwise.
    pub fn used_percent(&self, total_spent: Money) -> u16 {
        if self.total.is_zero() {
            return if total_spent.is_zero() { 0 } else { 999 };
        }
        let ratio = total_spent.cents() as f64 / self.total.cents() as f64;
        ((ratio * 100.0).round() as i64).clamp(0, 999) as u16
    }

    /// Overall budget left this month
    ///
    /// Unlike per-category remainders this is not floored: overspending the
    /// month shows as a negative figure.
    pub fn overall_remaining(&self, total_spent: Money) -> Money {
        self.total - total_spent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget() -> MonthlyBudget {
        MonthlyBudget::new(
            Money::from_cents(220000),
            vec![
                CategoryBudget::new("Groceries", Money::from_cents(45000)),
                CategoryBudget::new("Housing", Money::from_cents(95000)),
            ],
        )
    }

    #[test]
    fn test_ordered_lookup() {
        let budget = budget();
        let names: Vec<_> = budget.category_names().collect();
        assert_eq!(names, vec!["Groceries", "Housing"]);
        assert_eq!(
            budget.allocated_for("Housing"),
            Some(Money::from_cents(95000))
        );
        assert_eq!(budget.allocated_for("Travel"), None);
        assert!(budget.contains("Groceries"));
        assert!(!budget.contains("groceries"));
    }

    #[test]
    fn test_used_percent_rounds() {
        let budget = budget();
        // 148176 / 220000 = 67.35%
        assert_eq!(budget.used_percent(Money::from_cents(148176)), 67);
        assert_eq!(budget.used_percent(Money::zero()), 0);
    }

    #[test]
    fn test_used_percent_caps_at_999() {
        let budget = budget();
        assert_eq!(budget.used_percent(Money::from_cents(220000 * 50)), 999);
    }

    #[test]
    fn test_used_percent_zero_total() {
        let empty = MonthlyBudget::new(Money::zero(), Vec::new());
        assert_eq!(empty.used_percent(Money::zero()), 0);
        assert_eq!(empty.used_percent(Money::from_cents(1)), 999);
    }

    #[test]
    fn test_overall_remaining_goes_negative() {
        let budget = budget();
        assert_eq!(
            budget.overall_remaining(Money::from_cents(148176)),
            Money::from_cents(71824)
        );
        assert_eq!(
            budget.overall_remaining(Money::from_cents(230000)),
            Money::from_cents(-10000)
        );
    }
}
