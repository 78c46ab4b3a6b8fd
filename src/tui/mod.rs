//! Terminal User Interface module
//!
//! The interactive dashboard, built on ratatui: summary cards, a category
//! filter sidebar, budget and recurring panels, the transaction table, and
//! the quick-add dialog.

pub mod app;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
