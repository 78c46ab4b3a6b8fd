//! TUI views module
//!
//! The dashboard panels: summary cards, filter sidebar, budget rows,
//! recurring payments, the transaction table, and the status bar.

pub mod budget;
pub mod recurring;
pub mod sidebar;
pub mod status_bar;
pub mod summary_cards;
pub mod transactions;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    // One recompute per frame; every panel reads the same figures
    let summary = app.summary();

    let layout = AppLayout::new(
        frame.area(),
        app.budget.categories.len() as u16,
        app.recurring.len() as u16,
    );

    summary_cards::render(frame, app, &summary, layout.cards);
    sidebar::render(frame, app, layout.filters);
    recurring::render(frame, app, layout.recurring);
    budget::render(frame, app, &summary, layout.budget);
    transactions::render(frame, app, &summary, layout.transactions);
    status_bar::render(frame, app, &summary, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::QuickAdd => dialogs::quick_add::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}
