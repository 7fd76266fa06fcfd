#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;

use super::*;
use crate::ui::commands::handle_command;

fn app() -> App {
    App::new(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
}

fn fill(app: &mut App, kind: EntryKind, description: &str, value: &str) {
    app.form.kind = kind;
    app.form.description = description.into();
    app.form.value = value.into();
}

// ── Initial state ─────────────────────────────────────────────

#[test]
fn test_new_app_shows_zero_budget() {
    let app = app();
    assert_eq!(app.view.month, "October 2026");
    assert_eq!(app.view.budget, "+ 0.00");
    assert_eq!(app.view.income, "+ 0.00");
    assert_eq!(app.view.expenses, "- 0.00");
    assert_eq!(app.view.spend_ratio, "---");
    assert_eq!(app.focus, Focus::Description);
    assert_eq!(app.form.kind, EntryKind::Income);
}

// ── Form ──────────────────────────────────────────────────────

#[test]
fn test_submit_form_adds_and_clears() {
    let mut app = app();
    app.focus = Focus::Value;
    fill(&mut app, EntryKind::Income, "Salary", "1000");

    let entry = app.submit_form().unwrap();
    assert_eq!(entry.key(), EntryKey::new(EntryKind::Income, 0));
    assert!(app.form.description.is_empty());
    assert!(app.form.value.is_empty());
    assert_eq!(app.form.kind, EntryKind::Income);
    assert_eq!(app.focus, Focus::Description);

    assert_eq!(app.view.income_rows.len(), 1);
    assert_eq!(app.view.income_rows[0].value, "+ 1,000.00");
    assert_eq!(app.view.income_rows[0].percentage, None);
    assert_eq!(app.view.budget, "+ 1,000.00");
}

#[test]
fn test_submit_form_rejects_invalid_input() {
    let mut app = app();
    fill(&mut app, EntryKind::Expense, "", "10");
    assert!(app.submit_form().is_none());
    assert_eq!(app.status_message, "Description must not be empty");

    fill(&mut app, EntryKind::Expense, "Rent", "-10");
    assert!(app.submit_form().is_none());
    assert_eq!(app.status_message, "Amount must be greater than zero");
    // Rejected input stays in the form
    assert_eq!(app.form.description, "Rent");

    assert!(app.controller.entries(EntryKind::Expense).is_empty());
    assert!(app.view.expense_rows.is_empty());
}

#[test]
fn test_expense_rows_track_percentages() {
    let mut app = app();
    fill(&mut app, EntryKind::Expense, "Rent", "400");
    app.submit_form().unwrap();
    assert_eq!(app.view.expense_rows[0].percentage.as_deref(), Some("---"));
    assert_eq!(app.view.budget, "- 400.00");

    fill(&mut app, EntryKind::Income, "Salary", "1000");
    app.submit_form().unwrap();
    assert_eq!(app.view.expense_rows[0].percentage.as_deref(), Some("40%"));
    assert_eq!(app.view.spend_ratio, "40%");
    assert_eq!(app.view.budget, "+ 600.00");
    assert_eq!(app.view.expenses, "- 400.00");
}

// ── Deletion ──────────────────────────────────────────────────

#[test]
fn test_delete_selected_expense() {
    let mut app = app();
    fill(&mut app, EntryKind::Income, "Salary", "100");
    app.submit_form().unwrap();
    for (desc, value) in [("a", "10"), ("b", "20"), ("c", "30")] {
        fill(&mut app, EntryKind::Expense, desc, value);
        app.submit_form().unwrap();
    }

    app.focus = Focus::ExpenseList;
    app.expense_index = 2;
    let removed = app.delete_selected().unwrap();
    assert_eq!(removed.description, "c");
    assert_eq!(app.expense_index, 1);

    let keys: Vec<String> = app
        .view
        .expense_rows
        .iter()
        .map(|r| r.key.to_string())
        .collect();
    assert_eq!(keys, vec!["exp-0", "exp-1"]);
    assert_eq!(app.view.spend_ratio, "30%");
    assert_eq!(app.status_message, "Deleted: c");
}

#[test]
fn test_delete_selected_needs_list_focus() {
    let mut app = app();
    fill(&mut app, EntryKind::Income, "Salary", "100");
    app.submit_form().unwrap();
    app.focus = Focus::Description;
    assert!(app.selected_key().is_none());
    assert!(app.delete_selected().is_none());
    assert_eq!(app.view.income_rows.len(), 1);
}

#[test]
fn test_focus_cycles() {
    assert_eq!(Focus::Type.next(), Focus::Description);
    assert_eq!(Focus::ExpenseList.next(), Focus::Type);
    assert_eq!(Focus::Type.prev(), Focus::ExpenseList);
    assert!(Focus::Value.is_form());
    assert_eq!(Focus::IncomeList.list_kind(), Some(EntryKind::Income));
}

// ── Commands ──────────────────────────────────────────────────

#[test]
fn test_command_income_and_expense() {
    let mut app = app();
    handle_command("inc Monthly salary 2,500", &mut app).unwrap();
    handle_command("exp Rent 900", &mut app).unwrap();

    assert_eq!(app.view.income_rows[0].description, "Monthly salary");
    assert_eq!(app.view.income_rows[0].value, "+ 2,500.00");
    assert_eq!(app.view.expense_rows[0].percentage.as_deref(), Some("36%"));
    assert_eq!(app.view.budget, "+ 1,600.00");
}

#[test]
fn test_command_add_with_kind() {
    let mut app = app();
    handle_command("add expense Coffee 4.50", &mut app).unwrap();
    assert_eq!(app.view.expense_rows.len(), 1);

    handle_command("add gift Coffee 4.50", &mut app).unwrap();
    assert_eq!(app.view.expense_rows.len(), 1);
    assert!(app.status_message.starts_with("Usage: :add"));
}

#[test]
fn test_command_rejects_bad_amount() {
    let mut app = app();
    handle_command("exp Rent", &mut app).unwrap();
    assert!(app.controller.entries(EntryKind::Expense).is_empty());
    assert!(app.status_message.contains("Usage: :exp"));
}

#[test]
fn test_command_delete_by_key() {
    let mut app = app();
    handle_command("inc Salary 100", &mut app).unwrap();
    handle_command("inc Bonus 50", &mut app).unwrap();

    handle_command("delete inc-0", &mut app).unwrap();
    assert_eq!(app.view.income_rows.len(), 1);
    assert_eq!(app.view.income_rows[0].key, EntryKey::new(EntryKind::Income, 1));
    assert_eq!(app.view.income, "+ 50.00");

    handle_command("delete inc-0", &mut app).unwrap();
    assert_eq!(app.status_message, "No entry inc-0");

    handle_command("delete nonsense", &mut app).unwrap();
    assert!(app.status_message.contains("not an entry key"));
}

#[test]
fn test_command_type_toggles_form() {
    let mut app = app();
    handle_command("type", &mut app).unwrap();
    assert_eq!(app.form.kind, EntryKind::Expense);
    handle_command("t", &mut app).unwrap();
    assert_eq!(app.form.kind, EntryKind::Income);
}

#[test]
fn test_command_quit_and_help() {
    let mut app = app();
    handle_command("help", &mut app).unwrap();
    assert!(app.show_help);
    handle_command("q", &mut app).unwrap();
    assert!(!app.running);
}

#[test]
fn test_unknown_command_suggests() {
    let mut app = app();
    handle_command("delet exp-1", &mut app).unwrap();
    assert_eq!(
        app.status_message,
        "Unknown command: :delet. Did you mean :delete?"
    );
}
