use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Read, Write};

use crate::config::ScriptSource;
use crate::controller::{Controller, PresentationSink};
use crate::input::{parse_key, EntryInput};
use crate::models::{BudgetSummary, Entry, EntryKey, EntryKind, Percent};
use crate::ui::util::{budget_kind, format_number, format_percent, month_label};

/// One row of a replay script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    Add(EntryInput),
    Delete(EntryKey),
}

/// Prints every controller notification as one line.
struct TextSink {
    verbose: bool,
    lines: Vec<String>,
}

impl TextSink {
    fn new(verbose: bool) -> Self {
        Self {
            verbose,
            lines: Vec::new(),
        }
    }

    fn emit(&mut self, line: String) {
        if self.verbose {
            self.lines.push(line);
        }
    }

    fn flush_to(&mut self, out: &mut impl Write) -> io::Result<()> {
        for line in self.lines.drain(..) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

impl PresentationSink for TextSink {
    fn entry_added(&mut self, entry: &Entry) {
        self.emit(format!(
            "added {} {} {}",
            entry.key(),
            entry.description,
            format_number(entry.amount, entry.kind())
        ));
    }

    fn entry_removed(&mut self, key: EntryKey) {
        self.emit(format!("removed {key}"));
    }

    fn show_summary(&mut self, summary: &BudgetSummary) {
        self.emit(format!(
            "budget {} | income {} | expenses {} | {}",
            format_number(summary.net_budget, budget_kind(summary.net_budget)),
            format_number(summary.total_income, EntryKind::Income),
            format_number(summary.total_expense, EntryKind::Expense),
            format_percent(summary.spend_ratio)
        ));
    }

    fn show_percentages(&mut self, percentages: &[Percent]) {
        let shown: Vec<String> = percentages.iter().map(|p| format_percent(*p)).collect();
        self.emit(format!("percentages {}", shown.join(" ")).trim_end().to_string());
    }
}

pub(crate) fn replay(source: ScriptSource) -> Result<()> {
    let reader = open_script(&source)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_script(reader, &mut out, true)?;
    Ok(())
}

pub(crate) fn summary(source: ScriptSource) -> Result<()> {
    let reader = open_script(&source)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let controller = run_script(reader, &mut out, false)?;
    let month = month_label(chrono::Local::now().date_naive());
    write_summary(&controller, &month, &mut out)?;
    Ok(())
}

fn open_script(source: &ScriptSource) -> Result<Box<dyn Read>> {
    match source {
        ScriptSource::Stdin => Ok(Box::new(io::stdin())),
        ScriptSource::File(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            Ok(Box::new(file))
        }
    }
}

/// Apply every row of a CSV script in order, writing notifications to `out`
/// when `verbose`. Stops at the first bad row; earlier rows stay applied.
pub(crate) fn run_script(
    reader: impl Read,
    out: &mut impl Write,
    verbose: bool,
) -> Result<Controller> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut controller = Controller::new();
    let mut sink = TextSink::new(verbose);
    controller.init(&mut sink);
    sink.flush_to(out)?;

    for (i, result) in rdr.records().enumerate() {
        let record = result.context("Failed to read script row")?;
        let row = record.position().map_or(i as u64 + 1, |p| p.line());
        let fields: Vec<&str> = record.iter().collect();
        if fields.iter().all(|f| f.is_empty()) {
            continue;
        }

        let action = parse_action(&fields).with_context(|| format!("Line {row}"))?;
        match action {
            Action::Add(input) => {
                controller.add_entry(input, &mut sink);
            }
            Action::Delete(key) => {
                controller.delete_entry(key, &mut sink);
            }
        }
        sink.flush_to(out)?;
    }

    tracing::info!(
        income = controller.ledger().len(EntryKind::Income),
        expenses = controller.ledger().len(EntryKind::Expense),
        "script finished"
    );
    Ok(controller)
}

/// `add,<type>,<description>,<amount>`, `<type>,<description>,<amount>`,
/// `delete,<kind>-<id>` or `delete,<kind>,<id>`.
pub(crate) fn parse_action(fields: &[&str]) -> Result<Action> {
    let (action, rest) = fields
        .split_first()
        .ok_or_else(|| anyhow::anyhow!("Empty row"))?;

    match action.to_lowercase().as_str() {
        "add" => parse_add(rest),
        "delete" | "del" | "remove" => {
            let key = match rest {
                [key] => parse_key(key)?,
                [kind, id] => parse_key(&format!("{kind}-{id}"))?,
                _ => anyhow::bail!("Usage: delete,<inc|exp>-<id>"),
            };
            Ok(Action::Delete(key))
        }
        other if EntryKind::parse(other).is_some() => parse_add(fields),
        other => anyhow::bail!("Unknown action '{other}' (use add or delete)"),
    }
}

fn parse_add(fields: &[&str]) -> Result<Action> {
    match fields {
        [kind, description, amount] => Ok(Action::Add(EntryInput::parse(
            kind,
            description,
            amount,
        )?)),
        _ => anyhow::bail!("Usage: add,<inc|exp>,<description>,<amount>"),
    }
}

pub(crate) fn write_summary(
    controller: &Controller,
    month: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    let summary = controller.ledger().summary();

    writeln!(out, "Budgety: {month}")?;
    writeln!(out, "{}", "─".repeat(44))?;
    writeln!(
        out,
        "  Budget:     {}",
        format_number(summary.net_budget, budget_kind(summary.net_budget))
    )?;
    writeln!(
        out,
        "  Income:     {}",
        format_number(summary.total_income, EntryKind::Income)
    )?;
    writeln!(
        out,
        "  Expenses:   {}  ({})",
        format_number(summary.total_expense, EntryKind::Expense),
        format_percent(summary.spend_ratio)
    )?;

    for kind in EntryKind::all() {
        let entries = controller.entries(*kind);
        if entries.is_empty() {
            continue;
        }
        writeln!(out)?;
        writeln!(out, "{kind}:")?;
        for entry in entries {
            let pct = entry
                .percentage()
                .map(|p| format!("  {:>5}", format_percent(p)))
                .unwrap_or_default();
            writeln!(
                out,
                "  {:<7} {:<24} {:>14}{pct}",
                entry.key().to_string(),
                entry.description,
                format_number(entry.amount, *kind)
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
