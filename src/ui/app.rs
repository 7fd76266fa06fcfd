use chrono::NaiveDate;

use crate::controller::{Controller, PresentationSink};
use crate::input::EntryInput;
use crate::models::{BudgetSummary, Entry, EntryKey, EntryKind, Percent};
use crate::ui::util::{
    budget_kind, clamp_cursor, format_number, format_percent, month_label,
};

/// Which part of the page receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Type,
    Description,
    Value,
    IncomeList,
    ExpenseList,
}

impl Focus {
    pub(crate) fn all() -> &'static [Focus] {
        &[
            Self::Type,
            Self::Description,
            Self::Value,
            Self::IncomeList,
            Self::ExpenseList,
        ]
    }

    pub(crate) fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub(crate) fn prev(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }

    pub(crate) fn is_form(self) -> bool {
        matches!(self, Self::Type | Self::Description | Self::Value)
    }

    pub(crate) fn list_kind(self) -> Option<EntryKind> {
        match self {
            Self::IncomeList => Some(EntryKind::Income),
            Self::ExpenseList => Some(EntryKind::Expense),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

/// One rendered list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EntryRow {
    pub(crate) key: EntryKey,
    pub(crate) description: String,
    pub(crate) value: String,
    /// Expense rows only.
    pub(crate) percentage: Option<String>,
}

/// Display state of the page, fed by the controller.
#[derive(Debug, Clone)]
pub(crate) struct BudgetView {
    pub(crate) month: String,
    pub(crate) budget: String,
    pub(crate) budget_kind: EntryKind,
    pub(crate) income: String,
    pub(crate) expenses: String,
    pub(crate) spend_ratio: String,
    pub(crate) income_rows: Vec<EntryRow>,
    pub(crate) expense_rows: Vec<EntryRow>,
}

impl BudgetView {
    pub(crate) fn new(today: NaiveDate) -> Self {
        Self {
            month: month_label(today),
            budget: String::new(),
            budget_kind: EntryKind::Income,
            income: String::new(),
            expenses: String::new(),
            spend_ratio: String::new(),
            income_rows: Vec::new(),
            expense_rows: Vec::new(),
        }
    }

    pub(crate) fn rows(&self, kind: EntryKind) -> &[EntryRow] {
        match kind {
            EntryKind::Income => &self.income_rows,
            EntryKind::Expense => &self.expense_rows,
        }
    }

    fn rows_mut(&mut self, kind: EntryKind) -> &mut Vec<EntryRow> {
        match kind {
            EntryKind::Income => &mut self.income_rows,
            EntryKind::Expense => &mut self.expense_rows,
        }
    }
}

impl PresentationSink for BudgetView {
    fn entry_added(&mut self, entry: &Entry) {
        let kind = entry.kind();
        let row = EntryRow {
            key: entry.key(),
            description: entry.description.clone(),
            value: format_number(entry.amount, kind),
            percentage: entry.percentage().map(format_percent),
        };
        self.rows_mut(kind).push(row);
    }

    fn entry_removed(&mut self, key: EntryKey) {
        self.rows_mut(key.kind).retain(|row| row.key != key);
    }

    fn show_summary(&mut self, summary: &BudgetSummary) {
        self.budget_kind = budget_kind(summary.net_budget);
        self.budget = format_number(summary.net_budget, self.budget_kind);
        self.income = format_number(summary.total_income, EntryKind::Income);
        self.expenses = format_number(summary.total_expense, EntryKind::Expense);
        self.spend_ratio = format_percent(summary.spend_ratio);
    }

    fn show_percentages(&mut self, percentages: &[Percent]) {
        for (row, pct) in self.expense_rows.iter_mut().zip(percentages) {
            row.percentage = Some(format_percent(*pct));
        }
    }
}

/// The add-entry form.
#[derive(Debug, Clone)]
pub(crate) struct Form {
    pub(crate) kind: EntryKind,
    pub(crate) description: String,
    pub(crate) value: String,
}

impl Form {
    fn new() -> Self {
        Self {
            kind: EntryKind::Income,
            description: String::new(),
            value: String::new(),
        }
    }

    /// Empty the text fields; the selected type stays.
    pub(crate) fn clear(&mut self) {
        self.description.clear();
        self.value.clear();
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) focus: Focus,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) form: Form,
    pub(crate) controller: Controller,
    pub(crate) view: BudgetView,

    // List cursors
    pub(crate) income_index: usize,
    pub(crate) income_scroll: usize,
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(today: NaiveDate) -> Self {
        let controller = Controller::new();
        let mut view = BudgetView::new(today);
        controller.init(&mut view);

        Self {
            running: true,
            input_mode: InputMode::Normal,
            focus: Focus::Description,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            form: Form::new(),
            controller,
            view,

            income_index: 0,
            income_scroll: 0,
            expense_index: 0,
            expense_scroll: 0,

            visible_rows: 10,
        }
    }

    /// Validate the form and add the entry. Invalid input only sets a status
    /// message.
    pub(crate) fn submit_form(&mut self) -> Option<Entry> {
        match EntryInput::new(self.form.kind, &self.form.description, &self.form.value) {
            Ok(input) => {
                let entry = self.add_entry(input);
                self.form.clear();
                self.focus = Focus::Description;
                Some(entry)
            }
            Err(e) => {
                tracing::warn!(error = %e, "rejected form input");
                self.set_status(e.to_string());
                None
            }
        }
    }

    pub(crate) fn add_entry(&mut self, input: EntryInput) -> Entry {
        let entry = self.controller.add_entry(input, &mut self.view);
        self.set_status(format!(
            "Added {}: {} {}",
            entry.key(),
            entry.description,
            format_number(entry.amount, entry.kind())
        ));
        entry
    }

    pub(crate) fn delete_entry(&mut self, key: EntryKey) -> Option<Entry> {
        let removed = self.controller.delete_entry(key, &mut self.view);
        match &removed {
            Some(entry) => self.set_status(format!("Deleted: {}", entry.description)),
            None => self.set_status(format!("No entry {key}")),
        }
        self.clamp_cursors();
        removed
    }

    /// Delete the entry under the cursor of the focused list.
    pub(crate) fn delete_selected(&mut self) -> Option<Entry> {
        let key = self.selected_key()?;
        self.delete_entry(key)
    }

    pub(crate) fn selected_key(&self) -> Option<EntryKey> {
        let kind = self.focus.list_kind()?;
        let index = match kind {
            EntryKind::Income => self.income_index,
            EntryKind::Expense => self.expense_index,
        };
        self.view.rows(kind).get(index).map(|row| row.key)
    }

    pub(crate) fn toggle_kind(&mut self) {
        self.form.kind = self.form.kind.toggled();
    }

    /// Cursor and scroll offset of a list.
    pub(crate) fn cursor_mut(&mut self, kind: EntryKind) -> (&mut usize, &mut usize) {
        match kind {
            EntryKind::Income => (&mut self.income_index, &mut self.income_scroll),
            EntryKind::Expense => (&mut self.expense_index, &mut self.expense_scroll),
        }
    }

    fn clamp_cursors(&mut self) {
        for kind in EntryKind::all() {
            let len = self.view.rows(*kind).len();
            let (index, scroll) = self.cursor_mut(*kind);
            clamp_cursor(index, scroll, len);
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
