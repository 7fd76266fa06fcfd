#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::util::*;
use crate::models::{EntryKind, Percent};

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("日本語テスト", 4), "日本語…");
}

// ── format_number ─────────────────────────────────────────────

#[test]
fn test_format_number_income() {
    assert_eq!(format_number(dec!(2310), EntryKind::Income), "+ 2,310.00");
}

#[test]
fn test_format_number_expense_rounds() {
    assert_eq!(format_number(dec!(53.5668), EntryKind::Expense), "- 53.57");
}

#[test]
fn test_format_number_rounds_half_up() {
    assert_eq!(format_number(dec!(0.125), EntryKind::Income), "+ 0.13");
    assert_eq!(format_number(dec!(0.135), EntryKind::Income), "+ 0.14");
}

#[test]
fn test_format_number_uses_absolute_value() {
    assert_eq!(format_number(dec!(-150.5), EntryKind::Expense), "- 150.50");
}

#[test]
fn test_format_number_zero() {
    assert_eq!(format_number(dec!(0), EntryKind::Income), "+ 0.00");
}

#[test]
fn test_format_number_groups_every_thousand() {
    assert_eq!(
        format_number(dec!(1234567.891), EntryKind::Income),
        "+ 1,234,567.89"
    );
    assert_eq!(format_number(dec!(999.99), EntryKind::Expense), "- 999.99");
}

// ── budget_kind ───────────────────────────────────────────────

#[test]
fn test_budget_kind() {
    assert_eq!(budget_kind(dec!(60)), EntryKind::Income);
    assert_eq!(budget_kind(dec!(0)), EntryKind::Income);
    assert_eq!(budget_kind(dec!(-0.01)), EntryKind::Expense);
}

// ── format_percent ────────────────────────────────────────────

#[test]
fn test_format_percent() {
    assert_eq!(format_percent(Percent::new(40)), "40%");
    assert_eq!(format_percent(Percent::new(251)), "251%");
    assert_eq!(format_percent(Percent::new(0)), "---");
    assert_eq!(format_percent(Percent::UNKNOWN), "---");
}

// ── month_label ───────────────────────────────────────────────

#[test]
fn test_month_label() {
    let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    assert_eq!(month_label(date), "October 2026");
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert_eq!(month_label(date), "January 2024");
}

// ── cursor helpers ────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_window() {
    let (mut index, mut scroll) = (2, 0);
    scroll_down(&mut index, &mut scroll, 10, 3);
    assert_eq!((index, scroll), (3, 1));
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (4, 2);
    scroll_down(&mut index, &mut scroll, 5, 3);
    assert_eq!((index, scroll), (4, 2));
}

#[test]
fn test_scroll_up_and_top_bottom() {
    let (mut index, mut scroll) = (3, 3);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (2, 2));

    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (9, 6));

    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_clamp_cursor_after_shrink() {
    let (mut index, mut scroll) = (4, 3);
    clamp_cursor(&mut index, &mut scroll, 2);
    assert_eq!((index, scroll), (1, 1));

    clamp_cursor(&mut index, &mut scroll, 0);
    assert_eq!((index, scroll), (0, 0));
}
