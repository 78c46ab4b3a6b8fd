//! Core data models for outlay
//!
//! This module contains the data structures of the dashboard domain:
//! expenses and their drafts, the monthly budget, recurring payments, and the
//! category filter.

pub mod category;
pub mod expense;
pub mod filter;
pub mod ids;
pub mod money;
pub mod recurring;

pub use category::{CategoryBudget, MonthlyBudget};
pub use expense::{Expense, ExpenseDraft, ValidationError};
pub use filter::CategoryFilter;
pub use ids::{ExpenseId, RecurringId};
pub use money::Money;
pub use recurring::RecurringPayment;
