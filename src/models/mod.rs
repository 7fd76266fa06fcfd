mod entry;
mod summary;

pub use entry::{Entry, EntryDetail, EntryKey, EntryKind};
pub use summary::{BudgetSummary, Percent};

#[cfg(test)]
mod tests;
