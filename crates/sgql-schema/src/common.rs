//! Types shared across the schema.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Currency {
    Aud,
    Cad,
    Eur,
    Gbp,
    Jpy,
    Usd,
}

/// An amount of money in the smallest denomination of its currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Amount, e.g. cents for USD.
    #[serde(default, with = "sgql_core::lenient", skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    /// Currency of `amount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

impl Money {
    /// Create a money value.
    #[must_use]
    pub const fn new(amount: i64, currency: Currency) -> Self {
        Self {
            amount: Some(amount),
            currency: Some(currency),
        }
    }
}
