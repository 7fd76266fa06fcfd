use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, EntryRow, Focus, InputMode};
use super::commands;
use super::theme;
use super::util::truncate;
use crate::models::EntryKind;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Budget header
            Constraint::Length(3), // Add form
            Constraint::Min(5),    // Income / expense lists
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_form(f, chunks[1], app);
    render_lists(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);
    render_command_bar(f, chunks[4], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let view = &app.view;
    let lines = vec![
        Line::from(Span::styled(
            format!("Available budget in {}", view.month),
            theme::dim_style(),
        )),
        Line::from(Span::styled(
            view.budget.clone(),
            theme::amount_style(view.budget_kind),
        )),
        Line::from(vec![
            Span::styled(" INCOME ", theme::label_style(EntryKind::Income)),
            Span::styled(
                format!(" {:>16} ", view.income),
                theme::amount_style(EntryKind::Income),
            ),
        ]),
        Line::from(vec![
            Span::styled(" EXPENSES ", theme::label_style(EntryKind::Expense)),
            Span::styled(
                format!(" {:>14} ", view.expenses),
                theme::amount_style(EntryKind::Expense),
            ),
            Span::styled(format!(" {:>5} ", view.spend_ratio), theme::percent_style()),
        ]),
    ];

    let header = Paragraph::new(lines).centered().block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY)),
    );
    f.render_widget(header, area);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    // The whole form turns red while an expense is being entered
    let accent = match app.form.kind {
        EntryKind::Income => theme::ACCENT,
        EntryKind::Expense => theme::EXPENSE,
    };

    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(20),
            Constraint::Length(18),
        ])
        .split(area);

    let type_label = format!(" {} ", app.form.kind.sign());
    render_field(f, fields[0], "Type", &type_label, app.focus == Focus::Type, accent);
    render_field(
        f,
        fields[1],
        "Add description",
        &app.form.description,
        app.focus == Focus::Description,
        accent,
    );
    render_field(
        f,
        fields[2],
        "Value",
        &app.form.value,
        app.focus == Focus::Value,
        accent,
    );

    if app.input_mode == InputMode::Normal {
        let cursor = match app.focus {
            Focus::Description => Some((fields[1], app.form.description.chars().count())),
            Focus::Value => Some((fields[2], app.form.value.chars().count())),
            _ => None,
        };
        if let Some((rect, len)) = cursor {
            let x = rect.x + 1 + (len as u16).min(rect.width.saturating_sub(3));
            f.set_cursor_position((x, rect.y + 1));
        }
    }
}

fn render_field(f: &mut Frame, area: Rect, title: &str, text: &str, focused: bool, accent: Color) {
    let border = if focused {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::OVERLAY)
    };
    let field = Paragraph::new(Span::styled(text.to_string(), theme::normal_style())).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(format!(" {title} "), theme::title_style())),
    );
    f.render_widget(field, area);
}

fn render_lists(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_list(
        f,
        columns[0],
        app,
        EntryKind::Income,
        app.income_index,
        app.income_scroll,
    );
    render_list(
        f,
        columns[1],
        app,
        EntryKind::Expense,
        app.expense_index,
        app.expense_scroll,
    );
}

fn render_list(
    f: &mut Frame,
    area: Rect,
    app: &App,
    kind: EntryKind,
    index: usize,
    scroll: usize,
) {
    let focused = app.focus.list_kind() == Some(kind);
    let title = match kind {
        EntryKind::Income => " INCOME ",
        EntryKind::Expense => " EXPENSES ",
    };
    let color = theme::kind_color(kind);
    let border = if focused {
        Style::default().fg(color)
    } else {
        Style::default().fg(theme::OVERLAY)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));

    let rows = app.view.rows(kind);
    if rows.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "Nothing here yet",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let page = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(scroll)
        .take(page.max(1))
        .map(|(i, row)| {
            let style = if focused && i == index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            row_line(row, inner_width, style, color)
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn row_line(row: &EntryRow, width: usize, style: Style, color: Color) -> Line<'static> {
    let value = format!(" {} ", row.value);
    let pct = row
        .percentage
        .as_ref()
        .map(|p| format!("{p:>5} "))
        .unwrap_or_default();
    let fixed = value.chars().count() + pct.chars().count() + 1;
    let desc_width = width.saturating_sub(fixed);
    let desc = format!(" {:<desc_width$}", truncate(&row.description, desc_width));

    let mut spans = vec![
        Span::styled(desc, style),
        Span::styled(value, style.fg(color)),
    ];
    if !pct.is_empty() {
        spans.push(Span::styled(pct, style.fg(theme::PERCENT)));
    }
    Line::from(spans)
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default()
            .fg(theme::BASE)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        InputMode::Command => Style::default()
            .fg(theme::BASE)
            .bg(theme::PERCENT)
            .add_modifier(Modifier::BOLD),
    };

    let info = format!(
        " {} | {} income, {} expenses",
        app.view.month,
        app.view.income_rows.len(),
        app.view.expense_rows.len()
    );

    let right = if app.focus.is_form() {
        " Tab next | Space type | Enter add | Ctrl-q quit "
    } else {
        " j/k move | d delete | : command | ? help "
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.len() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Normal => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Fill in the form and press Enter, : for commands",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    theme::command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme::PERCENT)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let text = |s: &'static str| Line::from(Span::styled(s, theme::normal_style()));

    let mut help_text = vec![
        Line::from(Span::styled(
            " Budgety Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Form"),
        text("  Tab/Shift-Tab   Next/previous field   Enter      Add entry"),
        text("  Space, Left/Right (Type)  Toggle income/expense"),
        text("  Ctrl-t          Toggle type from any field"),
        text("  : (Type field)  Command line; in Description/Value it is text"),
        Line::from(""),
        section(" Lists"),
        text("  j/k or Up/Down  Move cursor           g/G        Top/Bottom"),
        text("  d or Delete     Delete entry          Ctrl-q     Quit"),
        text("  :               Command line          ?          This help"),
        Line::from(""),
        section(" Commands"),
    ];

    // Build command list dynamically from COMMANDS registry
    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 1 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<10} {desc}"),
            theme::normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        Style::default().fg(theme::TEXT_DIM),
    )));

    // Center the popup, clamped to terminal height
    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 76.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::BASE)),
    );
    f.render_widget(help, popup_area);
}
