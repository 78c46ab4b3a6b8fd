//! Category filter sidebar
//!
//! Mutually exclusive filter options: "All" plus every budget category.
//! The highlighted row is the active filter.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::tui::app::{App, FocusedPanel};

/// Render the filter list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Filters;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Filter ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let expenses = app.store.expenses();

    let mut items: Vec<ListItem> = Vec::with_capacity(app.filter_option_count());
    items.push(filter_item("All", expenses.len()));
    for category in &app.budget.categories {
        let count = expenses
            .iter()
            .filter(|e| e.category == category.name)
            .count();
        items.push(filter_item(&category.name, count));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.selected_filter_index));

    frame.render_stateful_widget(list, area, &mut state);
}

fn filter_item(name: &str, count: usize) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(format!("{:<16}", name), Style::default().fg(Color::White)),
        Span::styled(format!("{:>4}", count), Style::default().fg(Color::DarkGray)),
    ]))
}
