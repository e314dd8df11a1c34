//! Primitives for persistence adapters.
//!
//! A value is stored either as `(amount, currency)` or, for columns that
//! imply the default currency, as the bare amount. Reconstruction is strict:
//! unknown currencies and non-integer amounts are rejected.

use crate::config::MoneyConfig;
use crate::core::currency::CurrencyCode;
use crate::core::error::MoneyError;
use crate::core::money::Money;
use serde::{Deserialize, Serialize};

/// Storage shape of a [`Money`] value. Also its serde representation.
///
/// ```
/// use money_engine::core::money::Money;
///
/// let json = serde_json::to_string(&Money::new(1234, "EUR").unwrap()).unwrap();
/// assert_eq!(json, r#"{"amount":1234,"currency":"EUR"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMoney {
    pub amount: i64,
    pub currency: String,
}

impl From<Money> for StoredMoney {
    fn from(money: Money) -> Self {
        let (amount, currency) = to_primitives(&money);
        Self { amount, currency }
    }
}

impl TryFrom<StoredMoney> for Money {
    type Error = MoneyError;

    fn try_from(stored: StoredMoney) -> Result<Self, Self::Error> {
        from_primitives(stored.amount, &stored.currency)
    }
}

pub fn to_primitives(money: &Money) -> (i64, String) {
    (money.amount(), money.currency().as_str().to_string())
}

/// Rebuild a value from stored primitives.
pub fn from_primitives(amount: i64, currency: &str) -> Result<Money, MoneyError> {
    Money::new(amount, CurrencyCode::new(currency.trim())).map_err(|_| {
        MoneyError::invalid(format!(
            "stored currency {:?} is not a known currency",
            currency
        ))
    })
}

/// Rebuild a value from textual primitives, e.g. a CSV row.
pub fn parse_primitives(amount: &str, currency: &str) -> Result<Money, MoneyError> {
    let trimmed = amount.trim();
    let parsed: i64 = trimmed.parse().map_err(|_| {
        MoneyError::invalid(format!("stored amount {:?} is not an integer", amount))
    })?;
    from_primitives(parsed, currency)
}

/// Rebuild a value stored as a bare amount in the default currency.
pub fn from_amount(amount: i64, config: &MoneyConfig) -> Result<Money, MoneyError> {
    Money::with_default(amount, config)
}
