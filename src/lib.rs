//! # money-engine
//!
//! Integer-backed money values with exact arithmetic, fair allocation and
//! configurable formatting.
//!
//! A [`Money`](core::money::Money) is an amount in the currency's smallest
//! unit plus an ISO 4217 code. Floating point never enters the picture:
//! sums are exact, splits always add back up to the original amount, and the
//! one place fractional factors are applied rounds half-to-even.
//!
//! ## Architecture
//!
//! - **core** — Currency table, the `Money` type, errors
//! - **arithmetic** — Add/subtract/multiply, rounding, division and allocation
//! - **format** — Rendering to and parsing from human-readable text
//! - **config** — Process-wide default currency and format options
//! - **storage** — Primitives for persistence adapters
//!
//! ```
//! use money_engine::prelude::*;
//!
//! let bill = Money::new(10_000, "EUR").unwrap();
//! let shares = bill.divide(3).unwrap();
//! assert_eq!(shares[0].amount(), 3334);
//!
//! let text = format::to_string(&bill, &FormatOverrides::new(), &MoneyConfig::default()).unwrap();
//! assert_eq!(text, "€100.00");
//! ```

pub mod arithmetic;
pub mod config;
pub mod core;
pub mod format;
pub mod storage;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::MoneyConfig;
    pub use crate::core::currency::{Currency, CurrencyCode};
    pub use crate::core::error::MoneyError;
    pub use crate::core::money::{Money, MoneyFactory};
    pub use crate::format::{self, FormatOptions, FormatOverrides};
    pub use crate::storage::StoredMoney;
}
