use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Focus};
use crate::input::{parse_key, EntryInput};
use crate::models::EntryKind;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit Budgety", cmd_quit, r);
    register_command!("quit", "Quit Budgety", cmd_quit, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "inc",
        "Add income (e.g. :inc Salary 2500)",
        cmd_income,
        r
    );
    register_command!(
        "exp",
        "Add expense (e.g. :exp Rent 900)",
        cmd_expense,
        r
    );
    register_command!(
        "add",
        "Add entry (e.g. :add exp Coffee 4.50)",
        cmd_add,
        r
    );
    register_command!(
        "a",
        "Add entry (e.g. :a inc Gift 20)",
        cmd_add,
        r
    );
    register_command!(
        "delete",
        "Delete entry by key (e.g. :delete exp-3), or the selected one",
        cmd_delete,
        r
    );
    register_command!(
        "d",
        "Delete entry by key (e.g. :d inc-0), or the selected one",
        cmd_delete,
        r
    );
    register_command!("type", "Toggle form between income and expense", cmd_type, r);
    register_command!("t", "Toggle form between income and expense", cmd_type, r);
    register_command!("clear", "Clear the form", cmd_clear, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        // Try fuzzy match
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_income(args: &str, app: &mut App) -> anyhow::Result<()> {
    add_words(EntryKind::Income, args, app);
    Ok(())
}

fn cmd_expense(args: &str, app: &mut App) -> anyhow::Result<()> {
    add_words(EntryKind::Expense, args, app);
    Ok(())
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    let (kind, rest) = args.split_once(' ').unwrap_or((args, ""));
    match EntryKind::parse(kind) {
        Some(kind) => add_words(kind, rest, app),
        None => app.set_status("Usage: :add <inc|exp> <description> <amount>"),
    }
    Ok(())
}

fn add_words(kind: EntryKind, args: &str, app: &mut App) {
    match EntryInput::parse_words(kind, args) {
        Ok(input) => {
            app.add_entry(input);
        }
        Err(e) => {
            tracing::warn!(error = %e, "rejected command input");
            app.set_status(format!("{e}. Usage: :{} <description> <amount>", kind.tag()));
        }
    }
}

fn cmd_delete(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        if app.delete_selected().is_none() {
            app.set_status("Select an entry in a list, or use :delete <inc|exp>-<id>");
        }
        return Ok(());
    }

    match parse_key(args) {
        Ok(key) => {
            app.delete_entry(key);
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_type(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.toggle_kind();
    app.set_status(format!("Entry type: {}", app.form.kind));
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.form.clear();
    app.focus = Focus::Description;
    app.set_status("");
    Ok(())
}
