//! Parsing of human-formatted amounts such as `"$1,234.56"` or `"1.234,56 €"`.
//!
//! Parsing is strict. Thousands separators must sit between groups of three
//! digits, and digits beyond the currency's exponent are rejected rather than
//! rounded away.

use crate::config::MoneyConfig;
use crate::core::currency::{self, CurrencyCode};
use crate::core::error::MoneyError;
use crate::core::money::Money;
use crate::format::options::FormatOverrides;

/// Parse `text` as an amount of `currency`.
///
/// Separator and delimiter resolve the same way as for formatting. The
/// currency symbol (either side), a trailing ISO code and a leading minus
/// sign (before or after a left symbol) are accepted.
///
/// # Examples
///
/// ```
/// use money_engine::config::MoneyConfig;
/// use money_engine::format::{parse, FormatOverrides};
///
/// let config = MoneyConfig::default();
/// let m = parse("$1,234.56", "USD", &FormatOverrides::new(), &config).unwrap();
/// assert_eq!(m.amount(), 123456);
///
/// let european = FormatOverrides::new().separator(".").delimiter(",");
/// let m = parse("-1.234,5 €", "EUR", &european, &config).unwrap();
/// assert_eq!(m.amount(), -123450);
/// ```
pub fn parse(
    text: &str,
    currency: impl Into<CurrencyCode>,
    call: &FormatOverrides,
    config: &MoneyConfig,
) -> Result<Money, MoneyError> {
    let currency = currency.into();
    let meta = currency::get(&currency)?;
    let options = call.or(config.format()).resolve(Some(meta));
    if options.delimiter.is_empty() || options.separator == options.delimiter {
        return Err(MoneyError::invalid(format!(
            "ambiguous separators: separator {:?}, delimiter {:?}",
            options.separator, options.delimiter
        )));
    }

    let mut body = text.trim();
    if let Some(rest) = body.strip_suffix(meta.code) {
        body = rest.trim_end();
    }
    let mut negative = false;
    if let Some(rest) = body.strip_prefix('-') {
        negative = true;
        body = rest.trim_start();
    }
    if let Some(rest) = body.strip_prefix(meta.symbol) {
        body = rest.trim_start();
    } else if let Some(rest) = body.strip_suffix(meta.symbol) {
        body = rest.trim_end();
    }
    if let Some(rest) = body.strip_prefix('-') {
        if negative {
            return Err(malformed(text));
        }
        negative = true;
        body = rest.trim_start();
    }

    let (major_text, fraction_text) = match body.split_once(options.delimiter.as_str()) {
        Some((major, fraction)) => (major, Some(fraction)),
        None => (body, None),
    };
    let major_digits =
        strip_grouping(major_text, &options.separator).ok_or_else(|| malformed(text))?;

    let exponent = meta.exponent as usize;
    let minor = match fraction_text {
        None => 0,
        Some(fraction) => {
            if !is_digits(fraction) || fraction.len() > exponent {
                return Err(MoneyError::invalid(format!(
                    "{:?} has more fractional digits than {} allows ({})",
                    text, meta.code, exponent
                )));
            }
            format!("{:0<width$}", fraction, width = exponent)
                .parse::<i128>()
                .map_err(|_| malformed(text))?
        }
    };

    // Magnitude in i128: i64::MIN has no positive i64 counterpart.
    let major: i128 = major_digits
        .parse()
        .map_err(|_| MoneyError::overflow("parse"))?;
    let magnitude = major
        .checked_mul(i128::from(meta.minor_per_major()))
        .and_then(|a| a.checked_add(minor))
        .ok_or_else(|| MoneyError::overflow("parse"))?;
    let signed = if negative { -magnitude } else { magnitude };
    let amount = i64::try_from(signed).map_err(|_| MoneyError::overflow("parse"))?;

    Money::new(amount, currency)
}

/// Remove thousands separators from the major part.
///
/// With a separator, the first group holds 1 to 3 digits and every later
/// group exactly 3. Returns `None` when the grouping or digits are invalid.
fn strip_grouping(major: &str, separator: &str) -> Option<String> {
    if separator.is_empty() || !major.contains(separator) {
        return is_digits(major).then(|| major.to_string());
    }
    let mut groups = major.split(separator);
    let first = groups.next()?;
    if !is_digits(first) || first.len() > 3 {
        return None;
    }
    let mut digits = first.to_string();
    for group in groups {
        if !is_digits(group) || group.len() != 3 {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn malformed(text: &str) -> MoneyError {
    MoneyError::invalid(format!("cannot parse {:?} as money", text))
}

impl Money {
    /// Parse with the process-wide configuration, see [`parse`].
    pub fn parse(text: &str, currency: impl Into<CurrencyCode>) -> Result<Money, MoneyError> {
        parse(text, currency, &FormatOverrides::new(), crate::config::global())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(text: &str, currency: &str) -> Result<Money, MoneyError> {
        parse(text, currency, &FormatOverrides::new(), &MoneyConfig::default())
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(p("1234.56", "USD").unwrap(), Money::new(123456, "USD").unwrap());
        assert_eq!(p("1,234.56", "USD").unwrap(), Money::new(123456, "USD").unwrap());
        assert_eq!(p("12", "USD").unwrap(), Money::new(1200, "USD").unwrap());
        assert_eq!(p("0.5", "USD").unwrap(), Money::new(50, "USD").unwrap());
    }

    #[test]
    fn test_parse_with_symbol_and_code() {
        assert_eq!(p("$1,234.56", "USD").unwrap().amount(), 123456);
        assert_eq!(p("$ 1.00 USD", "USD").unwrap().amount(), 100);
        assert_eq!(p("1.00€", "EUR").unwrap().amount(), 100);
        assert_eq!(p("¥50,000", "JPY").unwrap().amount(), 50000);
    }

    #[test]
    fn test_parse_negative_forms() {
        assert_eq!(p("-$1.23", "USD").unwrap().amount(), -123);
        assert_eq!(p("$-1.23", "USD").unwrap().amount(), -123);
        assert_eq!(p("-1.23 €", "EUR").unwrap().amount(), -123);
        assert!(p("-$-1.23", "USD").is_err());
    }

    #[test]
    fn test_parse_custom_separators() {
        let options = FormatOverrides::new().separator(".").delimiter(",");
        let m = parse("1.234,56", "EUR", &options, &MoneyConfig::default()).unwrap();
        assert_eq!(m.amount(), 123456);
    }

    #[test]
    fn test_parse_rejects_excess_precision() {
        assert!(matches!(p("1.234", "USD"), Err(MoneyError::InvalidArgument(_))));
        assert!(matches!(p("1.5", "JPY"), Err(MoneyError::InvalidArgument(_))));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "abc", "1.2.3", "$", "1.", "--1", "1e5"] {
            assert!(
                matches!(p(bad, "USD"), Err(MoneyError::InvalidArgument(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_unknown_currency() {
        assert!(matches!(p("1.00", "XYZ"), Err(MoneyError::UnknownCurrency(_))));
    }

    #[test]
    fn test_parse_overflow() {
        assert!(matches!(
            p("99999999999999999999", "USD"),
            Err(MoneyError::Overflow { .. })
        ));
    }

    #[test]
    fn test_parse_extreme_amounts() {
        let config = MoneyConfig::default();
        for amount in [i64::MIN, i64::MAX, i64::MIN + 1] {
            for code in ["USD", "JPY", "KWD"] {
                let m = Money::new(amount, code).unwrap();
                let text = crate::format::to_string(&m, &FormatOverrides::new(), &config).unwrap();
                assert_eq!(p(&text, code).unwrap(), m, "{:?}", text);
            }
        }
        assert_eq!(p("$-92,233,720,368,547,758.08", "USD").unwrap().amount(), i64::MIN);
        assert!(matches!(
            p("$92,233,720,368,547,758.08", "USD"),
            Err(MoneyError::Overflow { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_misplaced_separators() {
        for bad in ["1,2,3", ",,5", ",500", "1,000,", "1,0000.00", "1234,567", "1,,000"] {
            assert!(
                matches!(p(bad, "USD"), Err(MoneyError::InvalidArgument(_))),
                "{:?} should be rejected",
                bad
            );
        }
        assert_eq!(p("1,000,000", "USD").unwrap().amount(), 100_000_000);
        assert_eq!(p("12,345.6", "USD").unwrap().amount(), 1_234_560);
    }

    #[test]
    fn test_parse_ambiguous_options() {
        let options = FormatOverrides::new().separator(".").delimiter(".");
        assert!(parse("1.00", "USD", &options, &MoneyConfig::default()).is_err());
    }
}
