//! Application state for the TUI
//!
//! The App struct owns all session state: the expense store, the budget, the
//! recurring list, and the active filter. Nested components never mutate it
//! directly; every change goes through [`App::append_expense`] or
//! [`App::select_filter`].

use crate::config::Settings;
use crate::models::{CategoryFilter, Expense, MonthlyBudget, RecurringPayment};
use crate::store::ExpenseStore;
use crate::summary::Summary;

use super::dialogs::quick_add::QuickAddFormState;

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Filters,
    Transactions,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    QuickAdd,
    Help,
}

/// Main application state
pub struct App {
    /// The expense store
    pub store: ExpenseStore,

    /// The monthly budget
    pub budget: MonthlyBudget,

    /// Static recurring payments list
    pub recurring: Vec<RecurringPayment>,

    /// Session settings
    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// The active transaction filter
    pub filter: CategoryFilter,

    /// Selected row in the filter sidebar (0 = "All")
    pub selected_filter_index: usize,

    /// Selected row in the transaction table
    pub selected_expense_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Quick-add form state
    pub quick_add_form: QuickAddFormState,
}

impl App {
    /// Create a new App instance
    pub fn new(
        store: ExpenseStore,
        budget: MonthlyBudget,
        recurring: Vec<RecurringPayment>,
        settings: Settings,
    ) -> Self {
        Self {
            store,
            budget,
            recurring,
            settings,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            filter: CategoryFilter::All,
            selected_filter_index: 0,
            selected_expense_index: 0,
            status_message: None,
            quick_add_form: QuickAddFormState::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Recompute the dashboard figures for the current state
    ///
    /// Pure and cheap; called once per render.
    pub fn summary(&self) -> Summary {
        Summary::compute(self.store.expenses(), &self.budget, &self.filter)
    }

    /// Number of rows in the filter sidebar ("All" plus every category)
    pub fn filter_option_count(&self) -> usize {
        self.budget.categories.len() + 1
    }

    /// Set the active filter from a sidebar row index
    ///
    /// Row 0 is the "All" sentinel; the rest follow budget order. Selection
    /// is the filter: there is no separate apply step.
    pub fn select_filter(&mut self, index: usize) {
        let index = index.min(self.filter_option_count().saturating_sub(1));
        self.selected_filter_index = index;
        self.filter = if index == 0 {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(self.budget.categories[index - 1].name.clone())
        };
        self.selected_expense_index = 0;
    }

    /// Append a validated expense to the store
    pub fn append_expense(&mut self, expense: Expense) {
        self.store.append(expense);
        self.selected_expense_index = 0;
    }

    /// Toggle focus between the filter sidebar and the transaction table
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Filters => FocusedPanel::Transactions,
            FocusedPanel::Transactions => FocusedPanel::Filters,
        };
    }

    /// Move selection up in the focused panel
    pub fn move_up(&mut self) {
        match self.focused_panel {
            FocusedPanel::Filters => {
                if self.selected_filter_index > 0 {
                    self.select_filter(self.selected_filter_index - 1);
                }
            }
            FocusedPanel::Transactions => {
                if self.selected_expense_index > 0 {
                    self.selected_expense_index -= 1;
                }
            }
        }
    }

    /// Move selection down in the focused panel
    ///
    /// `visible_rows` bounds the transaction table (its length depends on the
    /// active filter, which the caller has just computed).
    pub fn move_down(&mut self, visible_rows: usize) {
        match self.focused_panel {
            FocusedPanel::Filters => {
                if self.selected_filter_index + 1 < self.filter_option_count() {
                    self.select_filter(self.selected_filter_index + 1);
                }
            }
            FocusedPanel::Transactions => {
                if self.selected_expense_index + 1 < visible_rows {
                    self.selected_expense_index += 1;
                }
            }
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        if dialog == ActiveDialog::QuickAdd {
            self.quick_add_form = QuickAddFormState::new();
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }
}
