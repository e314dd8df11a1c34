use crate::config::MoneyConfig;
use crate::core::currency::{self, Currency};
use crate::core::error::MoneyError;
use crate::core::money::Money;
use crate::format::options::{FormatOptions, FormatOverrides};

/// Render `money` as text.
///
/// Options resolve in order: `call` > `config.format()` > the currency's
/// conventional symbol placement > built-in defaults.
///
/// # Examples
///
/// ```
/// use money_engine::config::MoneyConfig;
/// use money_engine::core::money::Money;
/// use money_engine::format::{to_string, FormatOverrides};
///
/// let options = FormatOverrides::new().separator(".").delimiter(",").symbol(false);
/// let m = Money::new(123456, "EUR").unwrap();
/// let text = to_string(&m, &options, &MoneyConfig::default()).unwrap();
/// assert_eq!(text, "1.234,56");
/// ```
pub fn to_string(
    money: &Money,
    call: &FormatOverrides,
    config: &MoneyConfig,
) -> Result<String, MoneyError> {
    let meta = money.currency_info()?;
    let options = call.or(config.format()).resolve(Some(meta));
    Ok(render_with(money, meta, &options))
}

/// Render with already resolved options.
pub fn render(money: &Money, options: &FormatOptions) -> Result<String, MoneyError> {
    let meta = currency::get(money.currency())?;
    Ok(render_with(money, meta, options))
}

fn render_with(money: &Money, meta: &Currency, options: &FormatOptions) -> String {
    let number = render_number(money.amount().unsigned_abs(), meta.exponent, options);
    let minus = if money.is_negative() { "-" } else { "" };
    let space = if options.symbol_space { " " } else { "" };

    let mut out = if !options.symbol {
        format!("{}{}", minus, number)
    } else if options.symbol_on_right {
        format!("{}{}{}{}", minus, number, space, meta.symbol)
    } else if options.minus_sign_first {
        format!("{}{}{}{}", minus, meta.symbol, space, number)
    } else {
        format!("{}{}{}{}", meta.symbol, space, minus, number)
    };

    if options.code {
        out.push(' ');
        out.push_str(meta.code);
    }
    out
}

/// Digits only: grouped major part plus the optional fraction.
fn render_number(units: u64, exponent: u32, options: &FormatOptions) -> String {
    let per_major = 10_u64.pow(exponent);
    let major = units / per_major;
    let minor = units % per_major;

    let mut number = group_thousands(major, &options.separator);
    if exponent > 0 && options.fractional_unit {
        let width = exponent as usize;
        let fraction = format!("{:0width$}", minor, width = width);
        let fraction = if options.strip_insignificant_zeros {
            fraction.trim_end_matches('0')
        } else {
            fraction.as_str()
        };
        if !fraction.is_empty() {
            number.push_str(&options.delimiter);
            number.push_str(fraction);
        }
    }
    number
}

/// Insert `separator` every three digits from the right.
fn group_thousands(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + (len / 3) * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

impl Money {
    /// Render using the process-wide configuration, see [`to_string`].
    pub fn to_string_with(&self, call: &FormatOverrides) -> Result<String, MoneyError> {
        to_string(self, call, crate::config::global())
    }
}
