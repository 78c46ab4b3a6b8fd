//! Help dialog
//!
//! Shows the keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("q", "Quit"),
        key_line("?", "Show/hide help"),
        key_line("a/n", "Add an expense"),
        key_line("Tab", "Switch panel focus"),
        key_line("h/l", "Focus filters / transactions"),
        key_line("j/k", "Move selection up/down"),
        key_line("g/G", "Jump to top/bottom of the table"),
        Line::from(""),
        section("Filters"),
        Line::from(""),
        Line::from("  Moving the selection applies the filter immediately."),
        Line::from("  \"All\" shows every expense."),
        Line::from(""),
        section("Quick Add"),
        Line::from(""),
        key_line("Tab", "Next field"),
        key_line("Up/Down", "Choose a category"),
        key_line("Enter", "Validate and add"),
        key_line("Esc", "Cancel without adding"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", key), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}
