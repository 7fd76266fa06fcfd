use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::models::EntryKind;
use crate::ui::app::{App, Focus, InputMode};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui() -> Result<()> {
    let mut app = App::new(chrono::Local::now().date_naive());
    tracing::info!("starting budget screen");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "budget screen failed");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // 6 header + 3 form + 2 bars + 2 list borders
            let content_height = f.area().height.saturating_sub(13) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(key, app)?;
            }
        }
    }
    Ok(())
}

pub(crate) fn handle_key(key: KeyEvent, app: &mut App) -> Result<()> {
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
    {
        app.running = false;
        return Ok(());
    }
    match app.input_mode {
        InputMode::Command => handle_command_input(key, app),
        InputMode::Normal if app.focus.is_form() => handle_form_input(key, app),
        InputMode::Normal => handle_list_input(key, app),
    }
}

// ── Input handlers ───────────────────────────────────────────

fn handle_command_input(key: KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_form_input(key: KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Esc => app.set_status(""),
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.toggle_kind();
        }
        _ if app.focus == Focus::Type => handle_type_field(key, app),
        KeyCode::Backspace => {
            if let Some(field) = field_mut(app) {
                field.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(field) = field_mut(app) {
                field.push(c);
            }
        }
        _ => {}
    }
    Ok(())
}

fn field_mut(app: &mut App) -> Option<&mut String> {
    match app.focus {
        Focus::Description => Some(&mut app.form.description),
        Focus::Value => Some(&mut app.form.value),
        _ => None,
    }
}

fn handle_type_field(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => app.toggle_kind(),
        KeyCode::Char('+') | KeyCode::Char('i') => app.form.kind = EntryKind::Income,
        KeyCode::Char('-') | KeyCode::Char('e') => app.form.kind = EntryKind::Expense,
        KeyCode::Char(':') => start_command(app),
        _ => {}
    }
}

fn handle_list_input(key: KeyEvent, app: &mut App) -> Result<()> {
    let Some(kind) = app.focus.list_kind() else {
        return Ok(());
    };
    let len = app.view.rows(kind).len();
    let page = app.visible_rows.max(1);

    match key.code {
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        KeyCode::Char(':') => start_command(app),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('j') | KeyCode::Down => {
            let (index, scroll) = app.cursor_mut(kind);
            scroll_down(index, scroll, len, page);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            let (index, scroll) = app.cursor_mut(kind);
            scroll_up(index, scroll);
        }
        KeyCode::Char('g') => {
            let (index, scroll) = app.cursor_mut(kind);
            scroll_to_top(index, scroll);
        }
        KeyCode::Char('G') => {
            let (index, scroll) = app.cursor_mut(kind);
            scroll_to_bottom(index, scroll, len, page);
        }
        KeyCode::Char('h') | KeyCode::Left => app.focus = Focus::IncomeList,
        KeyCode::Char('l') | KeyCode::Right => app.focus = Focus::ExpenseList,
        KeyCode::Char('d') | KeyCode::Delete => {
            app.delete_selected();
        }
        KeyCode::Char('a') | KeyCode::Esc => app.focus = Focus::Description,
        _ => {}
    }
    Ok(())
}

fn start_command(app: &mut App) {
    app.input_mode = InputMode::Command;
    app.command_input.clear();
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
