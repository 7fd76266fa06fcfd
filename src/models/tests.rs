#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── EntryKind ─────────────────────────────────────────────────

#[test]
fn test_entry_kind_parse() {
    assert_eq!(EntryKind::parse("inc"), Some(EntryKind::Income));
    assert_eq!(EntryKind::parse("INCOME"), Some(EntryKind::Income));
    assert_eq!(EntryKind::parse("+"), Some(EntryKind::Income));
    assert_eq!(EntryKind::parse("exp"), Some(EntryKind::Expense));
    assert_eq!(EntryKind::parse(" Expense "), Some(EntryKind::Expense));
    assert_eq!(EntryKind::parse("-"), Some(EntryKind::Expense));
    assert_eq!(EntryKind::parse("Expenses"), Some(EntryKind::Expense));
    assert_eq!(EntryKind::parse("transfer"), None);
    assert_eq!(EntryKind::parse(""), None);
}

#[test]
fn test_entry_kind_tag_roundtrip() {
    for kind in EntryKind::all() {
        assert_eq!(EntryKind::parse(kind.tag()), Some(*kind));
        assert_eq!(EntryKind::parse(kind.as_str()), Some(*kind));
    }
}

#[test]
fn test_entry_kind_toggled() {
    assert_eq!(EntryKind::Income.toggled(), EntryKind::Expense);
    assert_eq!(EntryKind::Expense.toggled(), EntryKind::Income);
}

#[test]
fn test_entry_kind_display() {
    assert_eq!(format!("{}", EntryKind::Income), "Income");
    assert_eq!(format!("{}", EntryKind::Expense), "Expense");
}

// ── Entry ─────────────────────────────────────────────────────

#[test]
fn test_income_entry_has_no_percentage() {
    let mut entry = Entry::new(EntryKind::Income, 0, "Salary".into(), dec!(1000));
    assert_eq!(entry.kind(), EntryKind::Income);
    assert_eq!(entry.percentage(), None);
    entry.calc_percentage(dec!(1000));
    assert_eq!(entry.percentage(), None);
}

#[test]
fn test_expense_entry_starts_unknown() {
    let entry = Entry::new(EntryKind::Expense, 4, "Rent".into(), dec!(400));
    assert_eq!(entry.kind(), EntryKind::Expense);
    assert_eq!(entry.percentage(), Some(Percent::UNKNOWN));
    assert_eq!(entry.key(), EntryKey::new(EntryKind::Expense, 4));
}

#[test]
fn test_expense_calc_percentage() {
    let mut entry = Entry::new(EntryKind::Expense, 0, "Food".into(), dec!(25));
    entry.calc_percentage(dec!(100));
    assert_eq!(entry.percentage(), Some(Percent::new(25)));

    entry.calc_percentage(Decimal::ZERO);
    assert_eq!(entry.percentage(), Some(Percent::UNKNOWN));
}

// ── EntryKey ──────────────────────────────────────────────────

#[test]
fn test_entry_key_display() {
    assert_eq!(EntryKey::new(EntryKind::Income, 3).to_string(), "inc-3");
    assert_eq!(EntryKey::new(EntryKind::Expense, 0).to_string(), "exp-0");
}

#[test]
fn test_entry_key_parse() {
    assert_eq!(
        EntryKey::parse("exp-12"),
        Some(EntryKey::new(EntryKind::Expense, 12))
    );
    assert_eq!(
        EntryKey::parse(" inc-0 "),
        Some(EntryKey::new(EntryKind::Income, 0))
    );
    assert_eq!(EntryKey::parse("exp"), None);
    assert_eq!(EntryKey::parse("exp-"), None);
    assert_eq!(EntryKey::parse("exp--1"), None);
    assert_eq!(EntryKey::parse("foo-1"), None);
}

// ── Percent ───────────────────────────────────────────────────

#[test]
fn test_percent_of_basic() {
    assert_eq!(Percent::of(dec!(40), dec!(100)), Percent::new(40));
    assert_eq!(Percent::of(dec!(1), dec!(3)), Percent::new(33));
    assert_eq!(Percent::of(dec!(2), dec!(3)), Percent::new(67));
}

#[test]
fn test_percent_of_rounds_half_up() {
    assert_eq!(Percent::of(dec!(1), dec!(200)), Percent::new(1));
    assert_eq!(Percent::of(dec!(5), dec!(1000)), Percent::new(1));
    assert_eq!(Percent::of(dec!(4), dec!(1000)), Percent::new(0));
}

#[test]
fn test_percent_of_can_exceed_hundred() {
    assert_eq!(Percent::of(dec!(250), dec!(100)), Percent::new(250));
}

#[test]
fn test_percent_of_zero_whole_is_unknown() {
    assert_eq!(Percent::of(dec!(40), Decimal::ZERO), Percent::UNKNOWN);
    assert_eq!(Percent::UNKNOWN.value(), -1);
}

#[test]
fn test_summary_default() {
    let summary = BudgetSummary::default();
    assert_eq!(summary.net_budget, Decimal::ZERO);
    assert_eq!(summary.total_income, Decimal::ZERO);
    assert_eq!(summary.total_expense, Decimal::ZERO);
    assert_eq!(summary.spend_ratio, Percent::UNKNOWN);
}
