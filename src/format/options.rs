use crate::core::currency::Currency;
use serde::{Deserialize, Serialize};

/// Fully resolved formatting options.
///
/// `Default` gives the built-in defaults: `1,234.56` with the symbol on the
/// left and no space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Thousands separator.
    pub separator: String,
    /// Separator between the major and the fractional part.
    pub delimiter: String,
    pub symbol: bool,
    pub symbol_on_right: bool,
    pub symbol_space: bool,
    /// Show the fractional part. Ignored for currencies without subunits.
    pub fractional_unit: bool,
    /// Drop trailing zeros of the fractional part.
    pub strip_insignificant_zeros: bool,
    /// Append the ISO code, e.g. `€1.00 EUR`.
    pub code: bool,
    /// Put the minus sign in front of the symbol rather than the digits.
    pub minus_sign_first: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            delimiter: ".".to_string(),
            symbol: true,
            symbol_on_right: false,
            symbol_space: false,
            fractional_unit: true,
            strip_insignificant_zeros: false,
            code: false,
            minus_sign_first: false,
        }
    }
}

/// A partial set of options; `None` fields defer to the next layer.
///
/// Used both for call-site options and for the process-wide configuration.
///
/// # Examples
///
/// ```
/// use money_engine::format::FormatOverrides;
///
/// let european = FormatOverrides::new().separator(".").delimiter(",");
/// assert_eq!(european.separator.as_deref(), Some("."));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOverrides {
    pub separator: Option<String>,
    pub delimiter: Option<String>,
    pub symbol: Option<bool>,
    pub symbol_on_right: Option<bool>,
    pub symbol_space: Option<bool>,
    pub fractional_unit: Option<bool>,
    pub strip_insignificant_zeros: Option<bool>,
    pub code: Option<bool>,
    pub minus_sign_first: Option<bool>,
}

impl FormatOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    pub fn symbol(mut self, show: bool) -> Self {
        self.symbol = Some(show);
        self
    }

    pub fn symbol_on_right(mut self, on_right: bool) -> Self {
        self.symbol_on_right = Some(on_right);
        self
    }

    pub fn symbol_space(mut self, space: bool) -> Self {
        self.symbol_space = Some(space);
        self
    }

    pub fn fractional_unit(mut self, show: bool) -> Self {
        self.fractional_unit = Some(show);
        self
    }

    pub fn strip_insignificant_zeros(mut self, strip: bool) -> Self {
        self.strip_insignificant_zeros = Some(strip);
        self
    }

    pub fn code(mut self, show: bool) -> Self {
        self.code = Some(show);
        self
    }

    pub fn minus_sign_first(mut self, first: bool) -> Self {
        self.minus_sign_first = Some(first);
        self
    }

    /// Layer `self` over `lower`: fields set here win.
    pub fn or(&self, lower: &FormatOverrides) -> FormatOverrides {
        FormatOverrides {
            separator: self.separator.clone().or_else(|| lower.separator.clone()),
            delimiter: self.delimiter.clone().or_else(|| lower.delimiter.clone()),
            symbol: self.symbol.or(lower.symbol),
            symbol_on_right: self.symbol_on_right.or(lower.symbol_on_right),
            symbol_space: self.symbol_space.or(lower.symbol_space),
            fractional_unit: self.fractional_unit.or(lower.fractional_unit),
            strip_insignificant_zeros: self
                .strip_insignificant_zeros
                .or(lower.strip_insignificant_zeros),
            code: self.code.or(lower.code),
            minus_sign_first: self.minus_sign_first.or(lower.minus_sign_first),
        }
    }

    /// Fill every unset field from the built-in defaults.
    ///
    /// When `currency` is given and no layer chose a symbol placement, the
    /// currency's conventional placement is used.
    pub fn resolve(&self, currency: Option<&Currency>) -> FormatOptions {
        let defaults = FormatOptions::default();
        let conventional_right = currency
            .map(|c| c.symbol_on_right)
            .unwrap_or(defaults.symbol_on_right);
        FormatOptions {
            separator: self.separator.clone().unwrap_or(defaults.separator),
            delimiter: self.delimiter.clone().unwrap_or(defaults.delimiter),
            symbol: self.symbol.unwrap_or(defaults.symbol),
            symbol_on_right: self.symbol_on_right.unwrap_or(conventional_right),
            symbol_space: self.symbol_space.unwrap_or(defaults.symbol_space),
            fractional_unit: self.fractional_unit.unwrap_or(defaults.fractional_unit),
            strip_insignificant_zeros: self
                .strip_insignificant_zeros
                .unwrap_or(defaults.strip_insignificant_zeros),
            code: self.code.unwrap_or(defaults.code),
            minus_sign_first: self.minus_sign_first.unwrap_or(defaults.minus_sign_first),
        }
    }
}
