//! Event handler for the TUI
//!
//! Routes key events to the active dialog or the dashboard panels. Every
//! handler runs to completion before the next event is read; there is no
//! other thread of control.

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, App, FocusedPanel};
use super::dialogs;

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // A fresh keypress retires the previous status message
    if !app.has_dialog() {
        app.clear_status();
    }

    match app.active_dialog {
        ActiveDialog::QuickAdd => dialogs::quick_add::handle_key(app, key),
        ActiveDialog::Help => handle_help_key(app, key),
        ActiveDialog::None => handle_normal_key(app, key),
    }
}

/// Any dismissal key closes the help overlay
fn handle_help_key(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?')
    ) {
        app.close_dialog();
    }
}

/// Handle keys on the dashboard
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
        }

        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
        }

        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.open_dialog(ActiveDialog::QuickAdd);
        }

        KeyCode::Tab => {
            app.toggle_panel_focus();
        }

        KeyCode::Char('h') | KeyCode::Left => {
            app.focused_panel = FocusedPanel::Filters;
        }

        KeyCode::Char('l') | KeyCode::Right => {
            app.focused_panel = FocusedPanel::Transactions;
        }

        KeyCode::Char('j') | KeyCode::Down => {
            let visible = app.summary().filtered.len();
            app.move_down(visible);
        }

        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }

        KeyCode::Char('g') => {
            if app.focused_panel == FocusedPanel::Transactions {
                app.selected_expense_index = 0;
            }
        }

        KeyCode::Char('G') => {
            if app.focused_panel == FocusedPanel::Transactions {
                app.selected_expense_index = app.summary().filtered.len().saturating_sub(1);
            }
        }

        _ => {}
    }
}
