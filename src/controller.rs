use crate::input::EntryInput;
use crate::ledger::Ledger;
use crate::models::{BudgetSummary, Entry, EntryKey, EntryKind, Percent};

/// Receives everything a front end needs to mirror the ledger.
pub(crate) trait PresentationSink {
    fn entry_added(&mut self, entry: &Entry);
    fn entry_removed(&mut self, key: EntryKey);
    fn show_summary(&mut self, summary: &BudgetSummary);
    /// One value per expense, in list order.
    fn show_percentages(&mut self, percentages: &[Percent]);
}

/// Owns the ledger and runs each user action through
/// mutate → recompute totals → publish → recompute percentages → publish.
#[derive(Debug, Default)]
pub(crate) struct Controller {
    ledger: Ledger,
}

impl Controller {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Publish the empty-ledger summary.
    pub(crate) fn init(&self, sink: &mut dyn PresentationSink) {
        sink.show_summary(&self.ledger.summary());
    }

    pub(crate) fn add_entry(&mut self, input: EntryInput, sink: &mut dyn PresentationSink) -> Entry {
        let entry = self
            .ledger
            .add_entry(input.kind, input.description, input.amount);
        tracing::info!(key = %entry.key(), description = %entry.description, "added entry");

        sink.entry_added(&entry);
        self.update_budget(sink);
        self.update_percentages(sink);
        entry
    }

    /// Delete by key. A missing key changes nothing and sends no removal
    /// notice, but totals and percentages are still republished.
    pub(crate) fn delete_entry(
        &mut self,
        key: EntryKey,
        sink: &mut dyn PresentationSink,
    ) -> Option<Entry> {
        let removed = self.ledger.remove_entry(key.kind, key.id);
        match &removed {
            Some(entry) => {
                tracing::info!(key = %key, description = %entry.description, "deleted entry");
                sink.entry_removed(key);
            }
            None => tracing::debug!(key = %key, "delete of missing entry ignored"),
        }

        self.update_budget(sink);
        self.update_percentages(sink);
        removed
    }

    fn update_budget(&mut self, sink: &mut dyn PresentationSink) {
        self.ledger.recompute_totals();
        sink.show_summary(&self.ledger.summary());
    }

    fn update_percentages(&mut self, sink: &mut dyn PresentationSink) {
        self.ledger.recompute_expense_percentages();
        sink.show_percentages(&self.ledger.expense_percentages());
    }

    pub(crate) fn entries(&self, kind: EntryKind) -> &[Entry] {
        self.ledger.entries(kind)
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
