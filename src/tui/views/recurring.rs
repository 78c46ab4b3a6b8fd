//! Recurring payments panel
//!
//! Static list of expected future charges. Nothing here is interactive; the
//! records exist only to be read.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the recurring payments list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Upcoming ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.recurring.is_empty() {
        let text = Paragraph::new("No upcoming payments.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let symbol = &app.settings.currency_symbol;

    let items: Vec<ListItem> = app
        .recurring
        .iter()
        .map(|payment| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("{:<17}", payment.title),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("{:>9}", payment.amount.format_with_symbol(symbol)),
                        Style::default().fg(Color::Yellow),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  due {}  {}",
                        payment.next_due.format(&app.settings.date_format),
                        payment.category
                    ),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
