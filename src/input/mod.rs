use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

use crate::models::{EntryKey, EntryKind};

/// Why raw form input was not turned into an entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum InputError {
    #[error("Unknown entry type '{0}' (use inc or exp)")]
    UnknownKind(String),
    #[error("Description must not be empty")]
    EmptyDescription,
    #[error("'{0}' is not a number")]
    InvalidAmount(String),
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,
    #[error("Amount must not exceed 1,000,000,000,000,000")]
    AmountTooLarge,
    #[error("'{0}' is not an entry key (expected e.g. inc-0 or exp-3)")]
    InvalidKey(String),
}

/// A validated `(type, description, amount)` record, ready for the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EntryInput {
    pub(crate) kind: EntryKind,
    pub(crate) description: String,
    pub(crate) amount: Decimal,
}

impl EntryInput {
    pub(crate) fn new(
        kind: EntryKind,
        description: &str,
        value: &str,
    ) -> Result<Self, InputError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(InputError::EmptyDescription);
        }
        let amount = parse_amount(value)?;
        Ok(Self {
            kind,
            description: description.to_string(),
            amount,
        })
    }

    /// Like [`EntryInput::new`] but with the type still in text form.
    pub(crate) fn parse(kind: &str, description: &str, value: &str) -> Result<Self, InputError> {
        let kind =
            EntryKind::parse(kind).ok_or_else(|| InputError::UnknownKind(kind.trim().to_string()))?;
        Self::new(kind, description, value)
    }

    /// Parse `<description...> <amount>`, where the amount is the last word.
    pub(crate) fn parse_words(kind: EntryKind, text: &str) -> Result<Self, InputError> {
        let text = text.trim();
        match text.rsplit_once(char::is_whitespace) {
            Some((description, value)) => Self::new(kind, description, value),
            None if text.is_empty() => Err(InputError::EmptyDescription),
            None => match parse_amount(text) {
                Ok(_) => Err(InputError::EmptyDescription),
                Err(e) => Err(e),
            },
        }
    }
}

/// Largest single amount accepted from input.
const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

/// Parse a user-typed amount: optional `$`, thousands commas, must be > 0
/// and at most `MAX_AMOUNT`.
pub(crate) fn parse_amount(value: &str) -> Result<Decimal, InputError> {
    let cleaned = value.trim().replace(['$', ','], "");
    let amount = Decimal::from_str(cleaned.trim())
        .map_err(|_| InputError::InvalidAmount(value.trim().to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(InputError::NonPositiveAmount);
    }
    if amount > Decimal::from(MAX_AMOUNT) {
        return Err(InputError::AmountTooLarge);
    }
    Ok(amount)
}

pub(crate) fn parse_key(text: &str) -> Result<EntryKey, InputError> {
    EntryKey::parse(text).ok_or_else(|| InputError::InvalidKey(text.trim().to_string()))
}
