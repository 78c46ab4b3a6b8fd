//! Expense table formatting

use crate::config::Settings;
use crate::models::Expense;

/// Format expenses as a fixed-width table, preserving the given order
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<22} {:<16} {:>12}  {}\n",
        "Date", "Merchant", "Category", "Amount", "Notes"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format!(
            "{:<12} {:<22} {:<16} {:>12}  {}\n",
            expense.date.format(&settings.date_format).to_string(),
            truncate(&expense.merchant, 22),
            truncate(&expense.category, 16),
            expense.amount.format_with_symbol(&settings.currency_symbol),
            expense.notes.as_deref().unwrap_or("-")
        ));
    }

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_table_lists_all_rows_in_order() {
        let expenses = seed::expenses();
        let text = format_expense_table(&expenses, &Settings::default());

        let urban = text.find("Urban Living").unwrap();
        let lyft = text.find("Lyft").unwrap();
        assert!(urban < lyft, "rows must keep store order");
        assert!(text.contains("$950.00"));
        assert!(text.contains("April rent"));
    }

    #[test]
    fn test_empty_table() {
        let text = format_expense_table(&[], &Settings::default());
        assert!(text.contains("No expenses recorded"));
    }

    #[test]
    fn test_missing_notes_render_as_dash() {
        let expenses = seed::expenses();
        let trader_joes = expenses.iter().find(|e| e.merchant == "Trader Joe's").unwrap();
        let text = format_expense_table(std::slice::from_ref(trader_joes), &Settings::default());
        assert!(text.trim_end().ends_with('-'));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long merchant name", 10), "a very lo…");
    }
}
