//! money-engine CLI
//!
//! Format, split and parse money amounts from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Format 1234.56 EUR in European style
//! money-engine format --amount 123456 --currency EUR --separator . --delimiter ,
//!
//! # Split 100.00 USD three ways
//! money-engine split --amount 10000 --parts 3
//!
//! # Parse a human-formatted amount
//! money-engine parse --text '$1,234.56' --currency USD
//! ```
//!
//! Defaults come from `MONEY_*` environment variables (see `MoneyConfig::from_env`).

use log::debug;
use money_engine::config::{self, MoneyConfig};
use money_engine::core::currency::{self, CurrencyCode};
use money_engine::core::error::MoneyError;
use money_engine::core::money::Money;
use money_engine::format::{self, FormatOverrides};
use std::process;

fn print_usage() {
    eprintln!(
        r#"money-engine — integer money arithmetic and formatting

USAGE:
    money-engine <COMMAND> [OPTIONS]

COMMANDS:
    format      Render an amount as text
    split       Divide an amount into equal parts
    allocate    Divide an amount by ratios
    parse       Parse human-formatted text into minor units
    currencies  List known currencies
    help        Show this message

OPTIONS (all commands):
    --currency <CODE>    Currency code (default: MONEY_DEFAULT_CURRENCY or USD)
    --format <FORMAT>    Output format: text (default) or json

OPTIONS (format, split, allocate):
    --amount <N>         Amount in minor units (cents)

OPTIONS (split):
    --parts <N>          Number of parts

OPTIONS (allocate):
    --ratios <LIST>      Comma-separated ratios, e.g. 70,20,10

OPTIONS (parse):
    --text <TEXT>        Text to parse

FORMATTING (format, split, allocate, parse):
    --separator <S>      Thousands separator
    --delimiter <S>      Fractional delimiter
    --no-symbol          Hide the currency symbol
    --symbol-right       Place the symbol after the digits
    --symbol-space       Space between symbol and digits
    --no-fraction        Hide the fractional part
    --strip-zeros        Drop trailing fraction zeros
    --code               Append the currency code
    --minus-sign-first   Put the minus sign before the symbol

EXAMPLES:
    money-engine format --amount 123456 --currency EUR --separator . --delimiter ,
    money-engine split --amount 99 --parts 2 --currency EUR
    money-engine allocate --amount 10000 --ratios 70,20,10
    money-engine parse --text '1.234,56 €' --currency EUR --separator . --delimiter ,
    money-engine currencies --format json"#
    );
}

#[derive(Default)]
struct Args {
    amount: Option<i64>,
    parts: Option<i64>,
    ratios: Option<Vec<u32>>,
    text: Option<String>,
    currency: Option<CurrencyCode>,
    json: bool,
    overrides: FormatOverrides,
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    args.get(i)
        .map(String::as_str)
        .unwrap_or_else(|| fail(format!("{} requires a value", flag)))
}

fn parse_args(args: &[String]) -> Args {
    let mut parsed = Args::default();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--amount" => {
                i += 1;
                let raw = value(args, i, flag);
                parsed.amount = Some(raw.parse().unwrap_or_else(|_| {
                    fail(format!("--amount must be an integer number of minor units, got '{}'", raw))
                }));
            }
            "--parts" => {
                i += 1;
                let raw = value(args, i, flag);
                parsed.parts = Some(
                    raw.parse()
                        .unwrap_or_else(|_| fail(format!("--parts requires a number, got '{}'", raw))),
                );
            }
            "--ratios" => {
                i += 1;
                let raw = value(args, i, flag);
                let ratios = raw
                    .split(',')
                    .map(|r| r.trim().parse::<u32>())
                    .collect::<Result<Vec<_>, _>>()
                    .unwrap_or_else(|_| fail(format!("--ratios requires a list of numbers, got '{}'", raw)));
                parsed.ratios = Some(ratios);
            }
            "--text" => {
                i += 1;
                parsed.text = Some(value(args, i, flag).to_string());
            }
            "--currency" => {
                i += 1;
                parsed.currency = Some(CurrencyCode::new(value(args, i, flag)));
            }
            "--format" => {
                i += 1;
                parsed.json = match value(args, i, flag) {
                    "json" => true,
                    "text" => false,
                    other => fail(format!("--format requires 'text' or 'json', got '{}'", other)),
                };
            }
            "--separator" => {
                i += 1;
                parsed.overrides.separator = Some(value(args, i, flag).to_string());
            }
            "--delimiter" => {
                i += 1;
                parsed.overrides.delimiter = Some(value(args, i, flag).to_string());
            }
            "--no-symbol" => parsed.overrides.symbol = Some(false),
            "--symbol-right" => parsed.overrides.symbol_on_right = Some(true),
            "--symbol-space" => parsed.overrides.symbol_space = Some(true),
            "--no-fraction" => parsed.overrides.fractional_unit = Some(false),
            "--strip-zeros" => parsed.overrides.strip_insignificant_zeros = Some(true),
            "--code" => parsed.overrides.code = Some(true),
            "--minus-sign-first" => parsed.overrides.minus_sign_first = Some(true),
            _ => fail(format!("Unknown option: {}", flag)),
        }
        i += 1;
    }
    parsed
}

/// JSON output for a single rendered amount.
#[derive(serde::Serialize)]
struct AmountOutput {
    amount: i64,
    currency: String,
    text: String,
}

impl AmountOutput {
    fn render(money: &Money, args: &Args, config: &MoneyConfig) -> Result<Self, MoneyError> {
        Ok(Self {
            amount: money.amount(),
            currency: money.currency().to_string(),
            text: format::to_string(money, &args.overrides, config)?,
        })
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(e),
    }
}

fn currency_for(args: &Args, config: &MoneyConfig) -> CurrencyCode {
    args.currency
        .clone()
        .unwrap_or_else(|| config.default_currency().clone())
}

fn require_amount(args: &Args) -> i64 {
    args.amount
        .unwrap_or_else(|| fail("--amount <N> is required"))
}

fn cmd_format(args: &Args, config: &MoneyConfig) -> Result<(), MoneyError> {
    let money = Money::new(require_amount(args), currency_for(args, config))?;
    let output = AmountOutput::render(&money, args, config)?;
    if args.json {
        print_json(&output);
    } else {
        println!("{}", output.text);
    }
    Ok(())
}

fn print_parts(parts: &[Money], args: &Args, config: &MoneyConfig) -> Result<(), MoneyError> {
    let outputs = parts
        .iter()
        .map(|m| AmountOutput::render(m, args, config))
        .collect::<Result<Vec<_>, _>>()?;
    if args.json {
        print_json(&outputs);
    } else {
        for (i, output) in outputs.iter().enumerate() {
            println!("{}", part_line(i, &output.text));
        }
    }
    Ok(())
}

/// Parts are numbered from 1.
fn part_line(index: usize, text: &str) -> String {
    format!("  Part {}: {}", index + 1, text)
}

fn cmd_split(args: &Args, config: &MoneyConfig) -> Result<(), MoneyError> {
    let money = Money::new(require_amount(args), currency_for(args, config))?;
    let parts = args.parts.unwrap_or_else(|| fail("--parts <N> is required"));
    print_parts(&money.divide(parts)?, args, config)
}

fn cmd_allocate(args: &Args, config: &MoneyConfig) -> Result<(), MoneyError> {
    let money = Money::new(require_amount(args), currency_for(args, config))?;
    let ratios = args
        .ratios
        .as_deref()
        .unwrap_or_else(|| fail("--ratios <LIST> is required"));
    print_parts(&money.allocate(ratios)?, args, config)
}

fn cmd_parse(args: &Args, config: &MoneyConfig) -> Result<(), MoneyError> {
    let text = args
        .text
        .as_deref()
        .unwrap_or_else(|| fail("--text <TEXT> is required"));
    let money = format::parse(text, currency_for(args, config), &args.overrides, config)?;
    if args.json {
        print_json(&money);
    } else {
        println!("{} {}", money.amount(), money.currency());
    }
    Ok(())
}

fn cmd_currencies(args: &Args) {
    if args.json {
        print_json(&currency::all());
    } else {
        for c in currency::all() {
            println!("{}  {:<4} exp {}  {}", c.code, c.symbol, c.exponent, c.name);
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = parse_args(&args[2..]);

    let config = MoneyConfig::from_env()
        .and_then(config::init)
        .unwrap_or_else(|e| fail(e));
    debug!("running '{}' with default currency {}", command, config.default_currency());

    let result = match command {
        "format" => cmd_format(&rest, config),
        "split" => cmd_split(&rest, config),
        "allocate" => cmd_allocate(&rest, config),
        "parse" => cmd_parse(&rest, config),
        "currencies" => {
            cmd_currencies(&rest);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        fail(e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_formatting_flags() {
        let parsed = parse_args(&args(&[
            "--amount",
            "-123",
            "--currency",
            "usd",
            "--minus-sign-first",
            "--symbol-space",
        ]));
        assert_eq!(parsed.amount, Some(-123));
        assert_eq!(parsed.currency, Some(CurrencyCode::new("USD")));
        assert_eq!(parsed.overrides.minus_sign_first, Some(true));
        assert_eq!(parsed.overrides.symbol_space, Some(true));

        let money = Money::new(-123, "USD").unwrap();
        let text = format::to_string(&money, &parsed.overrides, &MoneyConfig::default()).unwrap();
        assert_eq!(text, "-$ 1.23");
    }

    #[test]
    fn test_unknown_currency_is_an_error() {
        let parsed = parse_args(&args(&["--amount", "100", "--currency", "ZZZ"]));
        assert!(matches!(
            cmd_format(&parsed, &MoneyConfig::default()),
            Err(MoneyError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn test_huge_split_is_an_error() {
        let parsed = parse_args(&args(&["--amount", "1", "--parts", "9223372036854775807"]));
        assert!(matches!(
            cmd_split(&parsed, &MoneyConfig::default()),
            Err(MoneyError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parts_are_numbered_from_one() {
        assert_eq!(part_line(0, "$1.00"), "  Part 1: $1.00");
        assert_eq!(part_line(2, "$1.00"), "  Part 3: $1.00");
    }
}
