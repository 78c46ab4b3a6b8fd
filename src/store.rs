//! In-memory expense store
//!
//! Holds the ordered sequence of expense records for the lifetime of one
//! session, most-recent-first. The only mutation is append; records are never
//! edited or removed, and nothing is persisted.

use crate::models::Expense;

/// Ordered collection of expenses, newest first
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from records already in newest-first order
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    /// Place a new record at the head of the sequence
    ///
    /// Existing records keep their identity, values, and relative order.
    pub fn append(&mut self, expense: Expense) {
        self.expenses.insert(0, expense);
    }

    /// The full ordered sequence
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// True when no expenses have been recorded
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn expense(merchant: &str, cents: i64) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            "Groceries",
            merchant,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_append_goes_to_head() {
        let mut store = ExpenseStore::new();
        store.append(expense("first", 100));
        store.append(expense("second", 200));

        assert_eq!(store.len(), 2);
        assert_eq!(store.expenses()[0].merchant, "second");
        assert_eq!(store.expenses()[1].merchant, "first");
    }

    #[test]
    fn test_append_leaves_prior_records_unchanged() {
        let mut store = ExpenseStore::new();
        store.append(expense("first", 100));
        let before = store.expenses().to_vec();

        store.append(expense("second", 200));

        assert_eq!(store.len(), before.len() + 1);
        assert_eq!(&store.expenses()[1..], &before[..]);
    }

    #[test]
    fn test_empty_store() {
        let store = ExpenseStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.expenses().is_empty());
    }

    #[test]
    fn test_from_expenses_preserves_order() {
        let records = vec![expense("a", 1), expense("b", 2), expense("c", 3)];
        let store = ExpenseStore::from_expenses(records.clone());
        assert_eq!(store.expenses(), &records[..]);
    }
}
