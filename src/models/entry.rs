use rust_decimal::Decimal;

use super::Percent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Short tag used in entry keys (`inc-3`, `exp-0`).
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Income => "inc",
            Self::Expense => "exp",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "inc" | "income" | "+" => Some(Self::Income),
            "exp" | "expense" | "expenses" | "-" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn all() -> &'static [EntryKind] {
        &[Self::Income, Self::Expense]
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }

    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind-specific part of an entry. Only expenses carry a share of income.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryDetail {
    Income,
    Expense { percentage: Percent },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: u64,
    pub description: String,
    pub amount: Decimal,
    pub detail: EntryDetail,
}

impl Entry {
    pub fn new(kind: EntryKind, id: u64, description: String, amount: Decimal) -> Self {
        let detail = match kind {
            EntryKind::Income => EntryDetail::Income,
            EntryKind::Expense => EntryDetail::Expense {
                percentage: Percent::UNKNOWN,
            },
        };
        Self {
            id,
            description,
            amount,
            detail,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self.detail {
            EntryDetail::Income => EntryKind::Income,
            EntryDetail::Expense { .. } => EntryKind::Expense,
        }
    }

    pub fn key(&self) -> EntryKey {
        EntryKey {
            kind: self.kind(),
            id: self.id,
        }
    }

    /// Share of total income, `None` for income entries.
    pub fn percentage(&self) -> Option<Percent> {
        match self.detail {
            EntryDetail::Income => None,
            EntryDetail::Expense { percentage } => Some(percentage),
        }
    }

    /// Recompute the expense share against `total_income`. No-op for income.
    pub fn calc_percentage(&mut self, total_income: Decimal) {
        if let EntryDetail::Expense { percentage } = &mut self.detail {
            *percentage = Percent::of(self.amount, total_income);
        }
    }
}

/// Addresses one entry: its kind plus its per-kind id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryKey {
    pub kind: EntryKind,
    pub id: u64,
}

impl EntryKey {
    pub fn new(kind: EntryKind, id: u64) -> Self {
        Self { kind, id }
    }

    /// Parse `inc-3` / `exp-0`.
    pub fn parse(s: &str) -> Option<Self> {
        let (kind, id) = s.trim().split_once('-')?;
        let kind = EntryKind::parse(kind)?;
        let id = id.trim().parse().ok()?;
        Some(Self { kind, id })
    }
}

impl std::fmt::Display for EntryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.kind.tag(), self.id)
    }
}
