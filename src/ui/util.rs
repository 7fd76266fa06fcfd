use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{EntryKind, Percent};

/// Format an amount with a sign for its kind, thousand separators and
/// 2 decimal places. e.g. `(2310, Income)` → `"+ 2,310.00"`,
/// `(53.5668, Expense)` → `"- 53.57"`.
pub(crate) fn format_number(val: Decimal, kind: EntryKind) -> String {
    let abs = val
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    format!("{} {with_commas}.{dec_part}", kind.sign())
}

/// Net budget is shown as income when it is zero or positive.
pub(crate) fn budget_kind(net_budget: Decimal) -> EntryKind {
    if net_budget >= Decimal::ZERO {
        EntryKind::Income
    } else {
        EntryKind::Expense
    }
}

/// `"25%"`, or `"---"` when there is nothing meaningful to show.
pub(crate) fn format_percent(pct: Percent) -> String {
    if pct.value() > 0 {
        format!("{}%", pct.value())
    } else {
        "---".to_string()
    }
}

/// e.g. `"October 2026"`
pub(crate) fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is guaranteed to be at most `max` characters (counting "…" as one).
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Move a list cursor down by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_down(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if *index + 1 < len {
        *index += 1;
        if *index >= *scroll + page {
            *scroll = index.saturating_sub(page - 1);
        }
    }
}

/// Move a list cursor up by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_up(index: &mut usize, scroll: &mut usize) {
    *index = index.saturating_sub(1);
    if *index < *scroll {
        *scroll = *index;
    }
}

/// Jump cursor to the top of a list.
pub(crate) fn scroll_to_top(index: &mut usize, scroll: &mut usize) {
    *index = 0;
    *scroll = 0;
}

/// Jump cursor to the bottom of a list.
pub(crate) fn scroll_to_bottom(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if len > 0 {
        *index = len - 1;
        *scroll = index.saturating_sub(page.saturating_sub(1));
    }
}

/// Pull a cursor back inside a list that just shrank.
pub(crate) fn clamp_cursor(index: &mut usize, scroll: &mut usize, len: usize) {
    if *index >= len {
        *index = len.saturating_sub(1);
    }
    if *scroll > *index {
        *scroll = *index;
    }
}
