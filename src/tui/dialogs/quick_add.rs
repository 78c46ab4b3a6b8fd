//! Quick-add expense dialog
//!
//! Modal form for logging a new expense: date, category, merchant, amount,
//! and optional notes, with tab navigation and inline validation errors.
//! Enter runs the draft through validation; only a clean draft reaches the
//! store.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::ExpenseDraft;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the quick-add form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuickAddField {
    #[default]
    Date,
    Category,
    Merchant,
    Amount,
    Notes,
}

impl QuickAddField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Category,
            Self::Category => Self::Merchant,
            Self::Merchant => Self::Amount,
            Self::Amount => Self::Notes,
            Self::Notes => Self::Date,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Notes,
            Self::Category => Self::Date,
            Self::Merchant => Self::Category,
            Self::Amount => Self::Merchant,
            Self::Notes => Self::Amount,
        }
    }
}

/// State for the quick-add form dialog
#[derive(Debug, Clone)]
pub struct QuickAddFormState {
    /// Currently focused field
    pub focused_field: QuickAddField,

    /// Date input, prefilled with today
    pub date_input: TextInput,

    /// Selected category index into the budget's category list
    pub category_index: Option<usize>,

    /// Merchant input
    pub merchant_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Notes input
    pub notes_input: TextInput,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for QuickAddFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl QuickAddFormState {
    /// Create a new form state with default values
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            focused_field: QuickAddField::Date,
            date_input: TextInput::new()
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            category_index: None,
            merchant_input: TextInput::new().placeholder("Where did you spend?"),
            amount_input: TextInput::new().placeholder("0.00"),
            notes_input: TextInput::new().placeholder("Optional context"),
            error_message: None,
        }
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Get the currently focused text input, if the field is one
    ///
    /// The category field is a picker, not a text input.
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            QuickAddField::Date => Some(&mut self.date_input),
            QuickAddField::Category => None,
            QuickAddField::Merchant => Some(&mut self.merchant_input),
            QuickAddField::Amount => Some(&mut self.amount_input),
            QuickAddField::Notes => Some(&mut self.notes_input),
        }
    }

    /// Cycle the category picker
    pub fn cycle_category(&mut self, option_count: usize, forward: bool) {
        if option_count == 0 {
            return;
        }
        self.category_index = Some(match self.category_index {
            None => {
                if forward {
                    0
                } else {
                    option_count - 1
                }
            }
            Some(i) if forward => (i + 1) % option_count,
            Some(i) => (i + option_count - 1) % option_count,
        });
    }

    /// Assemble the raw draft from the current field values
    pub fn to_draft(&self, category_names: &[&str]) -> ExpenseDraft {
        ExpenseDraft {
            date: self.date_input.value().to_string(),
            category: self
                .category_index
                .and_then(|i| category_names.get(i))
                .map(|name| name.to_string())
                .unwrap_or_default(),
            merchant: self.merchant_input.value().to_string(),
            amount: self.amount_input.value().to_string(),
            notes: self.notes_input.value().to_string(),
        }
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Clear any error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Render the quick-add dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(54, 13, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Quick Add ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date
            Constraint::Length(1), // Category
            Constraint::Length(1), // Merchant
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Notes
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.quick_add_form;

    render_text_field(
        frame,
        chunks[0],
        "Date",
        &form.date_input,
        form.focused_field == QuickAddField::Date,
    );
    render_category_field(frame, app, chunks[1]);
    render_text_field(
        frame,
        chunks[2],
        "Merchant",
        &form.merchant_input,
        form.focused_field == QuickAddField::Merchant,
    );
    render_text_field(
        frame,
        chunks[3],
        "Amount",
        &form.amount_input,
        form.focused_field == QuickAddField::Amount,
    );
    render_text_field(
        frame,
        chunks[4],
        "Notes",
        &form.notes_input,
        form.focused_field == QuickAddField::Notes,
    );

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[6]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

/// Render a single text field with label, value, and cursor
fn render_text_field(frame: &mut Frame, area: Rect, label: &str, input: &TextInput, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![Span::styled(format!("{:>8}: ", label), label_style)];

    let value = input.value();
    let value_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Yellow)
    };

    if focused {
        let cursor = input.cursor.min(value.len());
        let (before, after) = value.split_at(cursor);

        spans.push(Span::styled(before.to_string(), value_style));

        let cursor_char = after.chars().next().unwrap_or(' ');
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));

        let rest = &after[cursor_char.len_utf8().min(after.len())..];
        if !rest.is_empty() {
            spans.push(Span::styled(rest.to_string(), value_style));
        }
    } else if value.is_empty() {
        spans.push(Span::styled(
            input.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(value.to_string(), value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the category picker line
fn render_category_field(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.quick_add_form;
    let focused = form.focused_field == QuickAddField::Category;

    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![Span::styled(format!("{:>8}: ", "Category"), label_style)];

    match form
        .category_index
        .and_then(|i| app.budget.categories.get(i))
    {
        Some(category) => {
            let value_style = if focused {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Yellow)
            };
            spans.push(Span::styled(category.name.clone(), value_style));
        }
        None => {
            spans.push(Span::styled(
                "Select".to_string(),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    if focused {
        spans.push(Span::styled(
            "  ↑/↓ to choose",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Handle key input for the quick-add dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.quick_add_form.prev_field();
            } else {
                app.quick_add_form.next_field();
            }
        }

        KeyCode::BackTab => {
            app.quick_add_form.prev_field();
        }

        KeyCode::Enter => {
            submit(app);
        }

        KeyCode::Up if app.quick_add_form.focused_field == QuickAddField::Category => {
            let count = app.budget.categories.len();
            app.quick_add_form.cycle_category(count, false);
        }

        KeyCode::Down if app.quick_add_form.focused_field == QuickAddField::Category => {
            let count = app.budget.categories.len();
            app.quick_add_form.cycle_category(count, true);
        }

        KeyCode::Backspace => {
            app.quick_add_form.clear_error();
            if app.quick_add_form.focused_field == QuickAddField::Category {
                app.quick_add_form.category_index = None;
            } else if let Some(input) = app.quick_add_form.focused_input() {
                input.backspace();
            }
        }

        KeyCode::Delete => {
            app.quick_add_form.clear_error();
            if let Some(input) = app.quick_add_form.focused_input() {
                input.delete();
            }
        }

        KeyCode::Left => {
            if let Some(input) = app.quick_add_form.focused_input() {
                input.move_left();
            }
        }

        KeyCode::Right => {
            if let Some(input) = app.quick_add_form.focused_input() {
                input.move_right();
            }
        }

        KeyCode::Home => {
            if let Some(input) = app.quick_add_form.focused_input() {
                input.move_start();
            }
        }

        KeyCode::End => {
            if let Some(input) = app.quick_add_form.focused_input() {
                input.move_end();
            }
        }

        KeyCode::Char(c) => {
            app.quick_add_form.clear_error();
            if let Some(input) = app.quick_add_form.focused_input() {
                input.insert(c);
            }
        }

        _ => {}
    }
}

/// Validate the draft and append it, or surface the failure in the dialog
fn submit(app: &mut App) {
    let names: Vec<&str> = app.budget.category_names().collect();
    let draft = app.quick_add_form.to_draft(&names);

    match draft.validate() {
        Ok(expense) => {
            let merchant = expense.merchant.clone();
            app.append_expense(expense);
            app.close_dialog();
            app.set_status(format!("Added expense at {}", merchant));
        }
        Err(err) => {
            app.quick_add_form.set_error(err.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::seed;
    use crate::store::ExpenseStore;
    use crate::tui::app::ActiveDialog;

    fn app() -> App {
        let mut app = App::new(
            ExpenseStore::new(),
            seed::budget(),
            Vec::new(),
            Settings::default(),
        );
        app.open_dialog(ActiveDialog::QuickAdd);
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_field_cycle_covers_all_fields() {
        let mut field = QuickAddField::Date;
        let mut seen = vec![field];
        for _ in 0..4 {
            field = field.next();
            seen.push(field);
        }
        assert_eq!(field.next(), QuickAddField::Date);
        seen.dedup();
        assert_eq!(seen.len(), 5);
        assert_eq!(QuickAddField::Date.prev(), QuickAddField::Notes);
    }

    #[test]
    fn test_submit_valid_form_appends_and_closes() {
        let mut app = app();

        // Date is prefilled; pick the first category, then fill the rest
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "Co-op");
        handle_key(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "12.50");
        handle_key(&mut app, key(KeyCode::Enter));

        assert!(!app.has_dialog());
        assert_eq!(app.store.len(), 1);
        let expense = &app.store.expenses()[0];
        assert_eq!(expense.category, "Groceries");
        assert_eq!(expense.merchant, "Co-op");
        assert_eq!(expense.amount, crate::models::Money::from_cents(1250));
        assert_eq!(expense.notes, None);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_submit_invalid_form_keeps_store_untouched() {
        let mut app = app();

        // No category, no merchant, no amount
        handle_key(&mut app, key(KeyCode::Enter));

        assert!(app.has_dialog());
        assert!(app.store.is_empty());
        assert!(app.quick_add_form.error_message.is_some());
    }

    #[test]
    fn test_typing_clears_error() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.quick_add_form.error_message.is_some());

        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "x");
        assert!(app.quick_add_form.error_message.is_none());
    }

    #[test]
    fn test_category_picker_wraps() {
        let mut form = QuickAddFormState::new();
        form.cycle_category(3, true);
        assert_eq!(form.category_index, Some(0));
        form.cycle_category(3, false);
        assert_eq!(form.category_index, Some(2));
        form.cycle_category(3, true);
        assert_eq!(form.category_index, Some(0));
    }

    #[test]
    fn test_escape_cancels_without_append() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Esc));

        assert!(!app.has_dialog());
        assert!(app.store.is_empty());
    }
}
