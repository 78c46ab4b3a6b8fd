//! Dashboard summary formatting
//!
//! Renders the computed summary for plain terminal output: overview figures,
//! per-category budget rows with a utilization bar, and the recurring list.

use serde::Serialize;

use crate::config::Settings;
use crate::error::OutlayResult;
use crate::models::{Money, MonthlyBudget, RecurringPayment};
use crate::summary::{BudgetUsage, Summary};

const BAR_WIDTH: usize = 20;

/// Format the overview block: totals, average, budget used, remaining
pub fn format_overview(summary: &Summary, budget: &MonthlyBudget, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let used = budget.used_percent(summary.total_spent);
    let remaining = budget.overall_remaining(summary.total_spent);

    let mut output = String::new();
    output.push_str(&format!(
        "Total spent      {:>12}   ({} tracked transactions)\n",
        summary.total_spent.format_with_symbol(symbol),
        summary.count
    ));
    output.push_str(&format!(
        "Average expense  {:>12}\n",
        summary.average.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Budget used      {:>11}%   (of {} monthly allocation)\n",
        used,
        budget.total.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining        {:>12}\n",
        remaining.format_with_symbol(symbol)
    ));

    output
}

/// Format per-category budget rows with a utilization bar
pub fn format_budget_rows(usage: &[BudgetUsage], settings: &Settings) -> String {
    if usage.is_empty() {
        return "No budget categories configured.\n".to_string();
    }

    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    for row in usage {
        let spent_of_allocated = format!(
            "{} / {}",
            row.spent.format_with_symbol(symbol),
            row.allocated.format_with_symbol(symbol)
        );
        let status = if row.exceeded {
            "over budget".to_string()
        } else {
            format!("{} left", row.remaining.format_with_symbol(symbol))
        };

        output.push_str(&format!(
            "{:<16} {:>21}  [{}] {:>3.0}%  {}\n",
            row.category,
            spent_of_allocated,
            utilization_bar(row.utilization),
            row.utilization,
            status
        ));
    }

    output
}

/// Format the recurring payments list
pub fn format_recurring(payments: &[RecurringPayment], settings: &Settings) -> String {
    if payments.is_empty() {
        return "No upcoming payments.\n".to_string();
    }

    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    for payment in payments {
        output.push_str(&format!(
            "{:<16} {:>10}   due {}   {}\n",
            payment.title,
            payment.amount.format_with_symbol(symbol),
            payment.next_due.format(&settings.date_format),
            payment.category
        ));
    }

    output
}

fn utilization_bar(utilization: f64) -> String {
    let filled = ((utilization / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// The summary plus the overall budget figures, for `--json` output
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    #[serde(flatten)]
    pub summary: Summary,

    /// Overall monthly ceiling
    pub total_budget: Money,

    /// Budget used percentage, capped at 999
    pub budget_used_percent: u16,

    /// Overall remaining, negative when overspent
    pub overall_remaining: Money,
}

impl SummaryReport {
    /// Attach the overall budget figures to a computed summary
    pub fn new(summary: Summary, budget: &MonthlyBudget) -> Self {
        let budget_used_percent = budget.used_percent(summary.total_spent);
        let overall_remaining = budget.overall_remaining(summary.total_spent);
        Self {
            summary,
            total_budget: budget.total,
            budget_used_percent,
            overall_remaining,
        }
    }

    /// Serialize the report as pretty-printed JSON
    pub fn to_json(&self) -> OutlayResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryFilter;
    use crate::seed;
    use crate::summary::Summary;

    fn seed_summary() -> (Summary, MonthlyBudget) {
        let budget = seed::budget();
        let summary = Summary::compute(&seed::expenses(), &budget, &CategoryFilter::All);
        (summary, budget)
    }

    #[test]
    fn test_overview_figures() {
        let (summary, budget) = seed_summary();
        let text = format_overview(&summary, &budget, &Settings::default());

        assert!(text.contains("$1481.76"));
        assert!(text.contains("9 tracked transactions"));
        assert!(text.contains("$164.64"));
        assert!(text.contains("67%"));
        assert!(text.contains("$718.24"));
    }

    #[test]
    fn test_budget_rows_mark_overspend() {
        let (summary, _) = seed_summary();
        let text = format_budget_rows(&summary.budget_usage, &Settings::default());

        // Housing is spent exactly to its allocation
        assert!(text.contains("Housing"));
        assert!(text.contains("$950.00 / $950.00"));
        assert!(!text.contains("over budget"));
        // Groceries has head room
        assert!(text.contains("$299.40 left"));
    }

    #[test]
    fn test_utilization_bar_bounds() {
        assert_eq!(utilization_bar(0.0), "░".repeat(BAR_WIDTH));
        assert_eq!(utilization_bar(100.0), "█".repeat(BAR_WIDTH));
        assert_eq!(utilization_bar(50.0).chars().count(), BAR_WIDTH);
    }

    #[test]
    fn test_recurring_list() {
        let text = format_recurring(&seed::recurring(), &Settings::default());
        assert!(text.contains("Internet"));
        assert!(text.contains("$79.00"));
        assert!(text.contains("due 2024-04-20"));
    }

    #[test]
    fn test_json_report() {
        let (summary, budget) = seed_summary();
        let json = SummaryReport::new(summary, &budget).to_json().unwrap();

        assert!(json.contains("\"count\": 9"));
        assert!(json.contains("\"total_spent\": 148176"));
        assert!(json.contains("\"budget_used_percent\": 67"));
        assert!(json.contains("\"overall_remaining\": 71824"));
    }
}
