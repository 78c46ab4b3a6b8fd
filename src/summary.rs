//! Aggregation engine
//!
//! [`Summary::compute`] is a pure function of (expense list, budget, filter):
//! no side effects, no external dependencies, deterministic for a given
//! input. It is cheap enough to re-run on every render, which is exactly how
//! the TUI uses it.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{CategoryFilter, Expense, Money, MonthlyBudget};

/// Derived per-category budget figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetUsage {
    /// Category name
    pub category: String,

    /// Allocated ceiling for the month
    pub allocated: Money,

    /// Sum of expense amounts recorded against the category
    pub spent: Money,

    /// Allocation left, floored at zero
    pub remaining: Money,

    /// Share of the allocation consumed, clamped to [0, 100]
    pub utilization: f64,

    /// Whether spending has passed the allocation
    pub exceeded: bool,
}

impl BudgetUsage {
    fn compute(category: &str, allocated: Money, spent: Money) -> Self {
        let remaining = (allocated - spent).max(Money::zero());
        let utilization = if allocated.is_positive() {
            (spent.cents() as f64 / allocated.cents() as f64 * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        Self {
            category: category.to_string(),
            allocated,
            spent,
            remaining,
            utilization,
            exceeded: spent > allocated,
        }
    }
}

/// The derived view model for the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Sum of amounts over the whole store, regardless of filter
    pub total_spent: Money,

    /// Number of expenses in the whole store
    pub count: usize,

    /// Mean expense amount, zero for an empty store
    pub average: Money,

    /// Whole-store spend grouped by category, including categories outside
    /// the budget's list
    pub spent_by_category: BTreeMap<String, Money>,

    /// One row per budget category in budget order; zero-spend categories
    /// included
    pub budget_usage: Vec<BudgetUsage>,

    /// The store restricted to the active filter, order preserved
    pub filtered: Vec<Expense>,
}

impl Summary {
    /// Recompute the dashboard figures from scratch
    pub fn compute(
        expenses: &[Expense],
        budget: &MonthlyBudget,
        filter: &CategoryFilter,
    ) -> Self {
        let total_spent: Money = expenses.iter().map(|e| e.amount).sum();
        let count = expenses.len();
        let average = if count > 0 {
            Money::from_cents((total_spent.cents() as f64 / count as f64).round() as i64)
        } else {
            Money::zero()
        };

        let mut spent_by_category: BTreeMap<String, Money> = BTreeMap::new();
        for expense in expenses {
            *spent_by_category
                .entry(expense.category.clone())
                .or_insert_with(Money::zero) += expense.amount;
        }

        let budget_usage = budget
            .categories
            .iter()
            .map(|cat| {
                let spent = spent_by_category
                    .get(&cat.name)
                    .copied()
                    .unwrap_or_else(Money::zero);
                BudgetUsage::compute(&cat.name, cat.allocated, spent)
            })
            .collect();

        let filtered = expenses
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();

        Self {
            total_spent,
            count,
            average,
            spent_by_category,
            budget_usage,
            filtered,
        }
    }
}
