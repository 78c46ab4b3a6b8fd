//! Transaction table view
//!
//! Shows the filtered expense list, newest first, in the store's order.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::summary::Summary;
use crate::tui::app::{App, FocusedPanel};

/// Render the transaction table
pub fn render(frame: &mut Frame, app: &App, summary: &Summary, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Transactions;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let subtitle = if app.filter.is_all() {
        format!("showing {} expenses", summary.filtered.len())
    } else {
        format!("filtered by {}", app.filter)
    };

    let block = Block::default()
        .title(format!(" Transactions — {} ", subtitle))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if summary.filtered.is_empty() {
        let text = Paragraph::new("No expenses here yet. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Length(20), // Merchant
        Constraint::Length(16), // Category
        Constraint::Length(10), // Amount
        Constraint::Min(10),    // Notes
    ];

    let header = Row::new(vec![
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Merchant").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Notes").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = &app.settings.currency_symbol;

    let rows: Vec<Row> = summary
        .filtered
        .iter()
        .map(|expense| {
            Row::new(vec![
                Cell::from(
                    expense
                        .date
                        .format(&app.settings.date_format)
                        .to_string(),
                ),
                Cell::from(truncate(&expense.merchant, 20)),
                Cell::from(truncate(&expense.category, 16))
                    .style(Style::default().fg(Color::Cyan)),
                Cell::from(expense.amount.format_with_symbol(symbol))
                    .style(Style::default().fg(Color::Yellow)),
                Cell::from(truncate(expense.notes.as_deref().unwrap_or("-"), 30))
                    .style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(
        app.selected_expense_index
            .min(summary.filtered.len().saturating_sub(1)),
    ));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
