//! Process-wide defaults: the default currency and default format options.
//!
//! A [`MoneyConfig`] is built once at startup (from the environment, a JSON
//! document, or code), optionally installed with [`init`], and only read
//! afterwards. Every operation that needs it also accepts one explicitly.

use crate::core::currency::{self, CurrencyCode};
use crate::core::error::MoneyError;
use crate::format::options::FormatOverrides;
use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;

pub const DEFAULT_CURRENCY: &str = "USD";

/// Environment variable prefix used by [`MoneyConfig::from_env`].
pub const ENV_PREFIX: &str = "MONEY_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoneyConfig {
    #[serde(default = "default_currency")]
    default_currency: CurrencyCode,
    #[serde(default)]
    format: FormatOverrides,
}

fn default_currency() -> CurrencyCode {
    CurrencyCode::new(DEFAULT_CURRENCY)
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            format: FormatOverrides::default(),
        }
    }
}

impl MoneyConfig {
    /// Config with the given default currency and no format overrides.
    pub fn new(default_currency: CurrencyCode) -> Self {
        Self {
            default_currency,
            format: FormatOverrides::default(),
        }
    }

    pub fn with_format(mut self, format: FormatOverrides) -> Self {
        self.format = format;
        self
    }

    pub fn default_currency(&self) -> &CurrencyCode {
        &self.default_currency
    }

    /// Process-level format overrides, layered under call-site options.
    pub fn format(&self) -> &FormatOverrides {
        &self.format
    }

    /// Check that the default currency exists.
    pub fn validate(&self) -> Result<(), MoneyError> {
        currency::get(&self.default_currency).map(|_| ())
    }

    /// Load from `MONEY_*` environment variables.
    ///
    /// | Variable | Meaning |
    /// |---|---|
    /// | `MONEY_DEFAULT_CURRENCY` | default currency code |
    /// | `MONEY_SEPARATOR` | thousands separator |
    /// | `MONEY_DELIMITER` | fractional delimiter |
    /// | `MONEY_SYMBOL` | show the symbol |
    /// | `MONEY_SYMBOL_ON_RIGHT` | symbol after the digits |
    /// | `MONEY_SYMBOL_SPACE` | space between symbol and digits |
    /// | `MONEY_FRACTIONAL_UNIT` | show the fractional part |
    /// | `MONEY_STRIP_INSIGNIFICANT_ZEROS` | drop trailing fraction zeros |
    /// | `MONEY_CODE` | append the ISO code |
    /// | `MONEY_MINUS_SIGN_FIRST` | minus sign before the symbol |
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, MoneyError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MoneyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));
        let flag = |name: &str| -> Result<Option<bool>, MoneyError> {
            var(name).map(|raw| parse_bool(name, &raw)).transpose()
        };

        let default_currency = var("DEFAULT_CURRENCY")
            .map(CurrencyCode::new)
            .unwrap_or_else(default_currency);
        let format = FormatOverrides {
            separator: var("SEPARATOR"),
            delimiter: var("DELIMITER"),
            symbol: flag("SYMBOL")?,
            symbol_on_right: flag("SYMBOL_ON_RIGHT")?,
            symbol_space: flag("SYMBOL_SPACE")?,
            fractional_unit: flag("FRACTIONAL_UNIT")?,
            strip_insignificant_zeros: flag("STRIP_INSIGNIFICANT_ZEROS")?,
            code: flag("CODE")?,
            minus_sign_first: flag("MINUS_SIGN_FIRST")?,
        };

        let config = Self {
            default_currency,
            format,
        };
        config.validate()?;
        debug!("loaded money config from environment: {:?}", config);
        Ok(config)
    }

    /// Load from a JSON document such as
    /// `{"default_currency": "EUR", "format": {"separator": "."}}`.
    pub fn from_json(json: &str) -> Result<Self, MoneyError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| MoneyError::invalid(format!("invalid money config: {}", e)))?;
        config.validate()?;
        debug!("loaded money config from JSON: {:?}", config);
        Ok(config)
    }
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, MoneyError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(MoneyError::invalid(format!(
            "{}{} must be a boolean, got {:?}",
            ENV_PREFIX, name, raw
        ))),
    }
}

static GLOBAL: OnceLock<MoneyConfig> = OnceLock::new();

/// Install the process-wide config. Succeeds once; later calls fail.
pub fn init(config: MoneyConfig) -> Result<&'static MoneyConfig, MoneyError> {
    config.validate()?;
    let mut installed = false;
    let current = GLOBAL.get_or_init(|| {
        installed = true;
        config
    });
    if installed {
        debug!(
            "installed process-wide money config (default currency {})",
            current.default_currency
        );
        Ok(current)
    } else {
        Err(MoneyError::invalid("money config is already initialized"))
    }
}

/// The installed config, or built-in defaults when [`init`] was never called.
pub fn global() -> &'static MoneyConfig {
    static FALLBACK: OnceLock<MoneyConfig> = OnceLock::new();
    GLOBAL
        .get()
        .unwrap_or_else(|| FALLBACK.get_or_init(MoneyConfig::default))
}
