//! Budget panel
//!
//! One row per budget category: spent against allocated, a utilization bar,
//! and what is left. Categories keep their budget order so the panel is
//! stable across renders.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::summary::{BudgetUsage, Summary};
use crate::tui::app::App;

const BAR_WIDTH: usize = 10;

/// Render the per-category budget table
pub fn render(frame: &mut Frame, app: &App, summary: &Summary, area: Rect) {
    let block = Block::default()
        .title(" Spending by category ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if summary.budget_usage.is_empty() {
        let text = Paragraph::new("No budget categories configured.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let symbol = &app.settings.currency_symbol;

    let header = Row::new(vec![
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Spent / Budget").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Use").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Left").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = summary
        .budget_usage
        .iter()
        .map(|usage| {
            let bar_style = if usage.exceeded {
                Style::default().fg(Color::Red)
            } else if usage.utilization >= 90.0 {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Green)
            };

            let (status, status_style) = if usage.exceeded {
                ("over budget".to_string(), Style::default().fg(Color::Red))
            } else {
                (
                    format!("{} left", usage.remaining.format_with_symbol(symbol)),
                    Style::default().fg(Color::Green),
                )
            };

            Row::new(vec![
                Cell::from(usage.category.clone()),
                Cell::from(format!(
                    "{} / {}",
                    usage.spent.format_with_symbol(symbol),
                    usage.allocated.format_with_symbol(symbol)
                )),
                Cell::from(format!(
                    "{} {:>3.0}%",
                    utilization_bar(usage),
                    usage.utilization
                ))
                .style(bar_style),
                Cell::from(status).style(status_style),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(14),     // Category
        Constraint::Length(20),  // Spent / Budget
        Constraint::Length(16),  // Bar + percent
        Constraint::Length(14),  // Left
    ];

    let table = Table::new(rows, widths).header(header).block(block);

    frame.render_widget(table, area);
}

fn utilization_bar(usage: &BudgetUsage) -> String {
    let filled = ((usage.utilization / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
