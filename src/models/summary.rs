use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Whole-number percentage. `UNKNOWN` (-1) marks a share of zero income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(i64);

impl Percent {
    pub const UNKNOWN: Percent = Percent(-1);

    #[cfg(test)]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// `round(part / whole * 100)`, or `UNKNOWN` unless `whole > 0`.
    /// Halves round up, as all inputs are non-negative.
    pub fn of(part: Decimal, whole: Decimal) -> Self {
        if whole <= Decimal::ZERO {
            return Self::UNKNOWN;
        }
        part.checked_div(whole)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map(|pct| pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|pct| pct.to_i64())
            .map(Self)
            .unwrap_or(Self::UNKNOWN)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Default for Percent {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

/// Aggregate view of the ledger, as of the last recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetSummary {
    pub net_budget: Decimal,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub spend_ratio: Percent,
}

impl Default for BudgetSummary {
    fn default() -> Self {
        Self {
            net_budget: Decimal::ZERO,
            total_income: Decimal::ZERO,
            total_expense: Decimal::ZERO,
            spend_ratio: Percent::UNKNOWN,
        }
    }
}
