use rust_decimal::Decimal;

use crate::models::{BudgetSummary, Entry, EntryKind, Percent};

/// Entries of one kind, in insertion order, plus the id the next one gets.
#[derive(Debug, Default)]
struct EntryList {
    entries: Vec<Entry>,
    next_id: u64,
}

impl EntryList {
    /// Sum of all amounts, saturating at `Decimal::MAX`.
    fn total(&self) -> Decimal {
        self.entries
            .iter()
            .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.amount))
            .unwrap_or_else(|| {
                tracing::warn!(entries = self.entries.len(), "total overflowed, capped");
                Decimal::MAX
            })
    }
}

/// In-memory income/expense bookkeeping.
///
/// Mutations (`add_entry`, `remove_entry`) never touch the aggregates. Callers
/// run `recompute_totals` and then `recompute_expense_percentages` after one or
/// more mutations; until then `summary()` reports the previous state.
#[derive(Debug, Default)]
pub(crate) struct Ledger {
    income: EntryList,
    expenses: EntryList,
    summary: BudgetSummary,
    stale: bool,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn list(&self, kind: EntryKind) -> &EntryList {
        match kind {
            EntryKind::Income => &self.income,
            EntryKind::Expense => &self.expenses,
        }
    }

    fn list_mut(&mut self, kind: EntryKind) -> &mut EntryList {
        match kind {
            EntryKind::Income => &mut self.income,
            EntryKind::Expense => &mut self.expenses,
        }
    }

    /// Append a new entry and return a copy of it. Ids are never reused within
    /// a kind, even after the highest one is removed.
    pub(crate) fn add_entry(
        &mut self,
        kind: EntryKind,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Entry {
        let list = self.list_mut(kind);
        let id = list.next_id;
        list.next_id += 1;

        let entry = Entry::new(kind, id, description.into(), amount);
        list.entries.push(entry.clone());
        self.stale = true;

        tracing::debug!(key = %entry.key(), amount = %entry.amount, "entry added");
        entry
    }

    /// Remove the entry with `id`, keeping the order of the rest.
    /// Returns `None` when there is no such entry.
    pub(crate) fn remove_entry(&mut self, kind: EntryKind, id: u64) -> Option<Entry> {
        let list = self.list_mut(kind);
        let index = list.entries.iter().position(|e| e.id == id)?;
        let removed = list.entries.remove(index);
        self.stale = true;

        tracing::debug!(key = %removed.key(), "entry removed");
        Some(removed)
    }

    pub(crate) fn recompute_totals(&mut self) {
        let total_income = self.income.total();
        let total_expense = self.expenses.total();

        self.summary = BudgetSummary {
            net_budget: total_income - total_expense,
            total_income,
            total_expense,
            spend_ratio: Percent::of(total_expense, total_income),
        };
        self.stale = false;

        tracing::debug!(
            income = %total_income,
            expense = %total_expense,
            net = %self.summary.net_budget,
            "totals recomputed"
        );
    }

    /// Refresh every expense's share of the total income from the last
    /// `recompute_totals`.
    pub(crate) fn recompute_expense_percentages(&mut self) {
        if self.is_stale() {
            tracing::warn!("expense percentages computed against outdated totals");
        }
        let total_income = self.summary.total_income;
        for entry in &mut self.expenses.entries {
            entry.calc_percentage(total_income);
        }
    }

    /// Percentages of every expense, parallel to `entries(EntryKind::Expense)`.
    pub(crate) fn expense_percentages(&self) -> Vec<Percent> {
        self.expenses
            .entries
            .iter()
            .map(|e| e.percentage().unwrap_or(Percent::UNKNOWN))
            .collect()
    }

    pub(crate) fn summary(&self) -> BudgetSummary {
        self.summary
    }

    /// True after a mutation that has not been followed by `recompute_totals`.
    pub(crate) fn is_stale(&self) -> bool {
        self.stale
    }

    pub(crate) fn entries(&self, kind: EntryKind) -> &[Entry] {
        &self.list(kind).entries
    }

    #[cfg(test)]
    pub(crate) fn get(&self, kind: EntryKind, id: u64) -> Option<&Entry> {
        self.list(kind).entries.iter().find(|e| e.id == id)
    }

    pub(crate) fn len(&self, kind: EntryKind) -> usize {
        self.list(kind).entries.len()
    }
}
