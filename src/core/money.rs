use crate::config::MoneyConfig;
use crate::core::currency::{self, Currency, CurrencyCode};
use crate::core::error::MoneyError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

/// An amount of money in a currency's smallest unit.
///
/// The amount is always a whole number of minor units (cents for EUR, yen for
/// JPY). Values are immutable: every operation returns a new `Money`.
///
/// Two values are equal only when both the amount and the currency match.
/// Ordering is only defined within one currency, see [`Money::compare`].
///
/// # Examples
///
/// ```
/// use money_engine::core::currency::CurrencyCode;
/// use money_engine::core::money::Money;
///
/// let a = Money::new(500, CurrencyCode::new("EUR")).unwrap();
/// let b = Money::new(500, CurrencyCode::new("EUR")).unwrap();
/// assert_eq!(a.add(&b).unwrap(), Money::new(1000, CurrencyCode::new("EUR")).unwrap());
/// assert!(Money::new(500, "ZZZ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "crate::storage::StoredMoney",
    into = "crate::storage::StoredMoney"
)]
pub struct Money {
    amount: i64,
    currency: CurrencyCode,
}

impl Money {
    /// Create a value of `amount` minor units.
    ///
    /// Fails with `UnknownCurrency` when the code is not in the currency table,
    /// so every `Money` refers to a known currency.
    pub fn new(amount: i64, currency: impl Into<CurrencyCode>) -> Result<Self, MoneyError> {
        let currency = currency.into();
        currency::get(&currency)?;
        Ok(Self { amount, currency })
    }

    /// Create a value in the configured default currency.
    pub fn with_default(amount: i64, config: &MoneyConfig) -> Result<Self, MoneyError> {
        Self::new(amount, config.default_currency().clone())
    }

    pub fn zero(currency: impl Into<CurrencyCode>) -> Result<Self, MoneyError> {
        Self::new(0, currency)
    }

    /// Combine a major-unit and a minor-unit part using the currency exponent.
    ///
    /// `from_major_minor(12, 34, "USD")` is 1234 cents. A negative `major`
    /// makes the whole value negative (`-12, 34` is -1234). Values between
    /// -1 and 0 major units have no negative major part; build them with
    /// [`from_major_minor_signed`](Self::from_major_minor_signed).
    /// `minor` must be below `10^exponent`.
    pub fn from_major_minor(
        major: i64,
        minor: i64,
        currency: impl Into<CurrencyCode>,
    ) -> Result<Self, MoneyError> {
        Self::from_major_minor_signed(major < 0, major.unsigned_abs(), minor, currency)
    }

    /// Like [`from_major_minor`](Self::from_major_minor) with an explicit sign,
    /// so that `-0.34` is `from_major_minor_signed(true, 0, 34, "USD")`.
    pub fn from_major_minor_signed(
        negative: bool,
        major: u64,
        minor: i64,
        currency: impl Into<CurrencyCode>,
    ) -> Result<Self, MoneyError> {
        let currency = currency.into();
        let meta = currency::get(&currency)?;
        let per_major = meta.minor_per_major();
        if !(0..per_major).contains(&minor) {
            return Err(MoneyError::invalid(format!(
                "minor part {} out of range for {} (exponent {})",
                minor, currency, meta.exponent
            )));
        }
        let magnitude = i128::from(major) * i128::from(per_major) + i128::from(minor);
        let signed = if negative { -magnitude } else { magnitude };
        let amount =
            i64::try_from(signed).map_err(|_| MoneyError::overflow("from_major_minor"))?;
        Ok(Self { amount, currency })
    }

    /// Lookup-driven shorthand constructor for one currency.
    ///
    /// ```
    /// use money_engine::core::money::Money;
    ///
    /// let eur = Money::for_currency("eur").unwrap();
    /// assert_eq!(eur.amount(99).amount(), 99);
    /// assert!(Money::for_currency("ZZZ").is_err());
    /// ```
    pub fn for_currency(code: impl Into<CurrencyCode>) -> Result<MoneyFactory, MoneyError> {
        let meta = currency::get(&code.into())?;
        Ok(MoneyFactory { currency: meta })
    }

    // --- Accessors ---

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Metadata of this value's currency.
    pub fn currency_info(&self) -> Result<&'static Currency, MoneyError> {
        currency::get(&self.currency)
    }

    // --- Predicates ---

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    pub fn same_currency(&self, other: &Money) -> bool {
        self.currency == other.currency
    }

    /// Order two values of the same currency.
    ///
    /// Unlike `==`, which simply answers `false` for different currencies,
    /// comparing across currencies is an error.
    pub fn compare(&self, other: &Money) -> Result<Ordering, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    pub(crate) fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.same_currency(other) {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                left: self.currency.clone(),
                right: other.currency.clone(),
            })
        }
    }

    /// Absolute value.
    ///
    /// # Panics
    ///
    /// Panics if the amount is `i64::MIN`, which has no positive counterpart.
    pub fn abs(&self) -> Money {
        assert!(
            self.amount != i64::MIN,
            "Money amount {} has no absolute value in i64",
            self.amount
        );
        self.with_amount(self.amount.abs())
    }

    /// Exact major-unit value, e.g. 1234 cents is `12.34`.
    pub fn to_decimal(&self) -> Result<Decimal, MoneyError> {
        let meta = self.currency_info()?;
        Ok(Decimal::new(self.amount, meta.exponent))
    }

    pub(crate) fn with_amount(&self, amount: i64) -> Money {
        Money {
            amount,
            currency: self.currency.clone(),
        }
    }
}

impl PartialOrd for Money {
    /// `None` when the currencies differ.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl Neg for Money {
    type Output = Money;

    /// # Panics
    ///
    /// Panics if the amount is `i64::MIN`.
    fn neg(self) -> Money {
        -&self
    }
}

impl Neg for &Money {
    type Output = Money;

    fn neg(self) -> Money {
        assert!(
            self.amount != i64::MIN,
            "Money amount {} cannot be negated in i64",
            self.amount
        );
        self.with_amount(-self.amount)
    }
}

impl fmt::Display for Money {
    /// Renders with built-in format options.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = crate::format::to_string(
            self,
            &crate::format::FormatOverrides::new(),
            &MoneyConfig::default(),
        )
        .map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// Constructs values of one currency, built from the currency table.
#[derive(Debug, Clone, Copy)]
pub struct MoneyFactory {
    currency: &'static Currency,
}

impl MoneyFactory {
    /// Value of `amount` minor units.
    pub fn amount(&self, amount: i64) -> Money {
        Money {
            amount,
            currency: CurrencyCode::new(self.currency.code),
        }
    }

    pub fn major_minor(&self, major: i64, minor: i64) -> Result<Money, MoneyError> {
        Money::from_major_minor(major, minor, self.currency.code)
    }

    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
