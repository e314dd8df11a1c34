use crate::core::currency::CurrencyCode;
use thiserror::Error;

/// Errors produced by money construction, arithmetic, formatting and parsing.
///
/// Every variant is a local failure of the call that produced it. Nothing in
/// the crate retries or recovers from these internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Two operands carry different currencies where equal ones are required.
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        left: CurrencyCode,
        right: CurrencyCode,
    },
    /// The code is not present in the currency table.
    #[error("unknown currency: {0}")]
    UnknownCurrency(CurrencyCode),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The result does not fit in a signed 64-bit minor-unit amount.
    #[error("amount overflow in {operation}")]
    Overflow { operation: &'static str },
}

impl MoneyError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }
}
