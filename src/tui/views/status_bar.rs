//! Status bar view
//!
//! One line at the bottom: headline figures, the active filter, any transient
//! status message, and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::summary::Summary;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, summary: &Summary, area: Rect) {
    let symbol = &app.settings.currency_symbol;
    let remaining = app.budget.overall_remaining(summary.total_spent);
    let remaining_color = if remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let mut spans = vec![
        Span::styled(" Spent: ", Style::default().fg(Color::White)),
        Span::styled(
            summary.total_spent.format_with_symbol(symbol),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled("Left: ", Style::default().fg(Color::White)),
        Span::styled(
            remaining.format_with_symbol(symbol),
            Style::default().fg(remaining_color),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("Filter: {}", app.filter),
            Style::default().fg(Color::Cyan),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = " a:Add  Tab:Focus  ?:Help  q:Quit ";
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());

    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
