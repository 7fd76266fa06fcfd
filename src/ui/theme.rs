use ratatui::style::{Color, Modifier, Style};

use crate::models::EntryKind;

pub(crate) const BASE: Color = Color::Rgb(30, 30, 46);
pub(crate) const ACCENT: Color = Color::Rgb(137, 180, 250);
pub(crate) const INCOME: Color = Color::Rgb(40, 185, 181);
pub(crate) const EXPENSE: Color = Color::Rgb(255, 89, 89);
pub(crate) const PERCENT: Color = Color::Rgb(249, 226, 175);
pub(crate) const SURFACE: Color = Color::Rgb(49, 50, 68);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
pub(crate) const OVERLAY: Color = Color::Rgb(69, 71, 90);
pub(crate) const COMMAND_BG: Color = Color::Rgb(24, 24, 37);

/// Colour of amounts, borders and focus for one kind of entry.
pub(crate) fn kind_color(kind: EntryKind) -> Color {
    match kind {
        EntryKind::Income => INCOME,
        EntryKind::Expense => EXPENSE,
    }
}

pub(crate) fn label_style(kind: EntryKind) -> Style {
    Style::default()
        .fg(BASE)
        .bg(kind_color(kind))
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn amount_style(kind: EntryKind) -> Style {
    Style::default()
        .fg(kind_color(kind))
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn percent_style() -> Style {
    Style::default().fg(BASE).bg(PERCENT)
}

pub(crate) fn title_style() -> Style {
    Style::default().fg(TEXT_DIM).add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(BASE).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}
