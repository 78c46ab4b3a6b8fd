//! outlay - Terminal dashboard for tracking monthly spending against a budget
//!
//! This library provides the core functionality for the outlay dashboard:
//! an in-memory expense store, a pure aggregation engine that derives the
//! dashboard figures, and the quick-add validation boundary, plus the TUI and
//! plain-text display layers on top.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Session settings (currency symbol, date format)
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, budget, recurring payments)
//! - `store`: The in-memory expense store
//! - `summary`: The aggregation engine
//! - `seed`: The demo dataset
//! - `display`: Plain-text rendering for the `summary` subcommand
//! - `tui`: The interactive dashboard
//!
//! # Example
//!
//! ```rust
//! use outlay::models::CategoryFilter;
//! use outlay::store::ExpenseStore;
//! use outlay::summary::Summary;
//! use outlay::seed;
//!
//! let store = ExpenseStore::from_expenses(seed::expenses());
//! let summary = Summary::compute(store.expenses(), &seed::budget(), &CategoryFilter::All);
//! assert_eq!(summary.count, 9);
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod seed;
pub mod store;
pub mod summary;
pub mod tui;

pub use error::{OutlayError, OutlayResult};
