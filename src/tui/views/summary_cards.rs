//! Summary card row
//!
//! Four at-a-glance figures across the top of the dashboard: total spent,
//! average expense, budget used, and overall remaining.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::summary::Summary;
use crate::tui::app::App;

/// Render the summary card row
pub fn render(frame: &mut Frame, app: &App, summary: &Summary, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let symbol = &app.settings.currency_symbol;
    let used = app.budget.used_percent(summary.total_spent);
    let remaining = app.budget.overall_remaining(summary.total_spent);

    render_card(
        frame,
        cards[0],
        "Total spent",
        summary.total_spent.format_with_symbol(symbol),
        format!("{} tracked transactions", summary.count),
        Color::White,
    );
    render_card(
        frame,
        cards[1],
        "Average expense",
        summary.average.format_with_symbol(symbol),
        "per transaction".to_string(),
        Color::White,
    );
    render_card(
        frame,
        cards[2],
        "Budget used",
        format!("{}%", used),
        format!("of {}", app.budget.total.format_with_symbol(symbol)),
        if used >= 100 { Color::Red } else { Color::Green },
    );
    // Shown as-is when overspent; the negative figure is the warning
    render_card(
        frame,
        cards[3],
        "Remaining",
        remaining.format_with_symbol(symbol),
        "before the monthly limit".to_string(),
        if remaining.is_negative() {
            Color::Red
        } else {
            Color::Green
        },
    );
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    caption: String,
    value_color: Color,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::styled(
            value,
            Style::default()
                .fg(value_color)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(caption, Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
