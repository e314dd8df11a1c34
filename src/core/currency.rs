use crate::core::error::MoneyError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// ISO 4217-style currency code.
///
/// Codes are normalized to ASCII upper case, so `"eur"` and `"EUR"` name the
/// same currency. Building a code never fails; whether the code exists is
/// only checked when its metadata is needed.
///
/// # Examples
///
/// ```
/// use money_engine::core::currency::CurrencyCode;
///
/// let eur = CurrencyCode::new("eur");
/// assert_eq!(eur.as_str(), "EUR");
/// assert_ne!(eur, CurrencyCode::new("USD"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        let mut code = code.into();
        code.make_ascii_uppercase();
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CurrencyCode {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

/// Display metadata for a single currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Currency {
    /// ISO 4217 alphabetic code (e.g. "EUR").
    pub code: &'static str,
    /// Full name (e.g. "Euro").
    pub name: &'static str,
    pub symbol: &'static str,
    /// Number of fractional digits: 2 for cents, 0 for no subunit.
    pub exponent: u32,
    /// Conventional symbol placement, used when no option decides it.
    pub symbol_on_right: bool,
}

impl Currency {
    /// Minor units per major unit, `10^exponent`.
    pub fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.exponent)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.name)
    }
}

const fn entry(
    code: &'static str,
    name: &'static str,
    symbol: &'static str,
    exponent: u32,
    symbol_on_right: bool,
) -> Currency {
    Currency {
        code,
        name,
        symbol,
        exponent,
        symbol_on_right,
    }
}

static CURRENCIES: &[Currency] = &[
    entry("AED", "UAE Dirham", "د.إ", 2, false),
    entry("ARS", "Argentine Peso", "$", 2, false),
    entry("AUD", "Australian Dollar", "$", 2, false),
    entry("BHD", "Bahraini Dinar", "BD", 3, false),
    entry("BRL", "Brazilian Real", "R$", 2, false),
    entry("CAD", "Canadian Dollar", "$", 2, false),
    entry("CHF", "Swiss Franc", "CHF", 2, false),
    entry("CLP", "Chilean Peso", "$", 0, false),
    entry("CNY", "Yuan Renminbi", "¥", 2, false),
    entry("COP", "Colombian Peso", "$", 2, false),
    entry("CZK", "Czech Koruna", "Kč", 2, true),
    entry("DKK", "Danish Krone", "kr.", 2, true),
    entry("EUR", "Euro", "€", 2, false),
    entry("GBP", "Pound Sterling", "£", 2, false),
    entry("HKD", "Hong Kong Dollar", "$", 2, false),
    entry("HUF", "Forint", "Ft", 2, true),
    entry("IDR", "Rupiah", "Rp", 2, false),
    entry("ILS", "New Israeli Sheqel", "₪", 2, false),
    entry("INR", "Indian Rupee", "₹", 2, false),
    entry("ISK", "Iceland Krona", "kr", 0, true),
    entry("JOD", "Jordanian Dinar", "JD", 3, false),
    entry("JPY", "Yen", "¥", 0, false),
    entry("KRW", "Won", "₩", 0, false),
    entry("KWD", "Kuwaiti Dinar", "KD", 3, false),
    entry("MXN", "Mexican Peso", "$", 2, false),
    entry("NOK", "Norwegian Krone", "kr", 2, true),
    entry("NZD", "New Zealand Dollar", "$", 2, false),
    entry("OMR", "Rial Omani", "ر.ع.", 3, false),
    entry("PHP", "Philippine Peso", "₱", 2, false),
    entry("PLN", "Zloty", "zł", 2, true),
    entry("RUB", "Russian Ruble", "₽", 2, false),
    entry("SAR", "Saudi Riyal", "﷼", 2, false),
    entry("SEK", "Swedish Krona", "kr", 2, true),
    entry("SGD", "Singapore Dollar", "$", 2, false),
    entry("THB", "Baht", "฿", 2, false),
    entry("TND", "Tunisian Dinar", "DT", 3, false),
    entry("TRY", "Turkish Lira", "₺", 2, false),
    entry("TWD", "New Taiwan Dollar", "NT$", 2, false),
    entry("UAH", "Hryvnia", "₴", 2, false),
    entry("USD", "US Dollar", "$", 2, false),
    entry("VND", "Dong", "₫", 0, true),
    entry("ZAR", "Rand", "R", 2, false),
];

fn index() -> &'static HashMap<&'static str, &'static Currency> {
    static INDEX: OnceLock<HashMap<&'static str, &'static Currency>> = OnceLock::new();
    INDEX.get_or_init(|| {
        debug!("indexing {} currencies", CURRENCIES.len());
        CURRENCIES.iter().map(|c| (c.code, c)).collect()
    })
}

/// All known currencies, ordered by code.
pub fn all() -> &'static [Currency] {
    CURRENCIES
}

/// Look up the metadata for `code`.
///
/// # Examples
///
/// ```
/// use money_engine::core::currency::{self, CurrencyCode};
///
/// let jpy = currency::get(&CurrencyCode::new("JPY")).unwrap();
/// assert_eq!(jpy.exponent, 0);
/// assert!(currency::get(&CurrencyCode::new("ZZZ")).is_err());
/// ```
pub fn get(code: &CurrencyCode) -> Result<&'static Currency, MoneyError> {
    index()
        .get(code.as_str())
        .copied()
        .ok_or_else(|| MoneyError::UnknownCurrency(code.clone()))
}

pub fn exists(code: &CurrencyCode) -> bool {
    index().contains_key(code.as_str())
}

pub fn symbol(code: &CurrencyCode) -> Result<&'static str, MoneyError> {
    get(code).map(|c| c.symbol)
}

pub fn name(code: &CurrencyCode) -> Result<&'static str, MoneyError> {
    get(code).map(|c| c.name)
}

pub fn exponent(code: &CurrencyCode) -> Result<u32, MoneyError> {
    get(code).map(|c| c.exponent)
}
