//! Layout definitions for the TUI
//!
//! The dashboard splits into a summary-card row, a sidebar (filters and
//! recurring payments), a main column (budget rows and the transaction
//! table), and a one-line status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the dashboard
pub struct AppLayout {
    /// Summary card row across the top
    pub cards: Rect,
    /// Category filter list
    pub filters: Rect,
    /// Recurring payments panel
    pub recurring: Rect,
    /// Per-category budget rows
    pub budget: Rect,
    /// Filtered transaction table
    pub transactions: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate the layout from the available area
    ///
    /// Panel heights track the dataset: the budget panel gets one row per
    /// category, the recurring panel two lines per payment.
    pub fn new(area: Rect, category_rows: u16, recurring_rows: u16) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Summary cards
                Constraint::Min(10),   // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(30), // Sidebar (fixed width)
                Constraint::Min(40),    // Main content
            ])
            .split(vertical[1]);

        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),                            // Filters
                Constraint::Length(recurring_rows * 2 + 2),    // Recurring
            ])
            .split(body[0]);

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(category_rows + 3), // Budget rows + header
                Constraint::Min(5),                    // Transactions
            ])
            .split(body[1]);

        Self {
            cards: vertical[0],
            filters: sidebar[0],
            recurring: sidebar[1],
            budget: main[0],
            transactions: main[1],
            status_bar: vertical[2],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Create a centered rect sized as a percentage of the parent
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
