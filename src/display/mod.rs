//! Display formatting for terminal output
//!
//! Plain-text rendering of the dashboard for the `summary` subcommand. The
//! TUI has its own renderers; this module is for piping and scripting.

pub mod summary;
pub mod transaction;

pub use summary::{format_budget_rows, format_overview, format_recurring, SummaryReport};
pub use transaction::format_expense_table;
