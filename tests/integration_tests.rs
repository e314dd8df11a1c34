use money_engine::config::MoneyConfig;
use money_engine::core::currency::{self, CurrencyCode};
use money_engine::core::error::MoneyError;
use money_engine::core::money::Money;
use money_engine::format::{self, FormatOverrides};
use money_engine::storage::{self, StoredMoney};
use rust_decimal_macros::dec;

/// Full pipeline: construct → arithmetic → split → format → parse back.
#[test]
fn full_pipeline_restaurant_bill() {
    let eur = Money::for_currency("EUR").unwrap();
    let config = MoneyConfig::new(CurrencyCode::new("EUR"))
        .with_format(FormatOverrides::new().separator(".").delimiter(","));

    let food = eur.major_minor(84, 50).unwrap();
    let drinks = eur.amount(3_720);
    let subtotal = food.add(&drinks).unwrap();
    assert_eq!(subtotal, eur.amount(12_170));

    // 12.5% service, rounded half-to-even: 1521.25 -> 1521
    let service = subtotal.multiply_decimal(dec!(0.125)).unwrap();
    assert_eq!(service.amount(), 1_521);

    let total = subtotal.add(&service).unwrap();
    let shares = total.divide(3).unwrap();
    assert_eq!(shares.len(), 3);
    let sum = shares
        .iter()
        .try_fold(Money::zero("EUR").unwrap(), |acc, m| acc.add(m))
        .unwrap();
    assert_eq!(sum, total);

    let call = FormatOverrides::new().symbol_on_right(true).symbol_space(true);
    let text = format::to_string(&total, &call, &config).unwrap();
    assert_eq!(text, "136,91 €");

    let parsed = format::parse(&text, "EUR", &call, &config).unwrap();
    assert_eq!(parsed, total);
}

#[test]
fn documented_examples_hold() {
    let eur = |a| Money::new(a, "EUR").unwrap();

    assert_eq!(eur(500).add(&eur(500)).unwrap(), eur(1000));
    assert_eq!(eur(1000).multiply(10).unwrap(), eur(10000));
    assert_eq!(eur(99).divide(2).unwrap(), vec![eur(50), eur(49)]);
    assert!(matches!(
        eur(500).add(&Money::new(500, "USD").unwrap()),
        Err(MoneyError::CurrencyMismatch { .. })
    ));
    assert_eq!(eur(500), eur(500));
    assert_ne!(eur(500), Money::new(500, "USD").unwrap());
    assert!(eur(500).compare(&Money::new(500, "USD").unwrap()).is_err());

    let options = FormatOverrides::new().separator(".").delimiter(",").symbol(false);
    assert_eq!(
        format::to_string(&eur(123456), &options, &MoneyConfig::default()).unwrap(),
        "1.234,56"
    );
}

#[test]
fn zero_exponent_currency_never_shows_fraction() {
    let config = MoneyConfig::default();
    for options in [
        FormatOverrides::new(),
        FormatOverrides::new().fractional_unit(true),
        FormatOverrides::new().strip_insignificant_zeros(true),
    ] {
        let text = format::to_string(&Money::new(50_000, "JPY").unwrap(), &options, &config).unwrap();
        assert_eq!(text, "¥50,000");
    }
}

#[test]
fn every_table_currency_formats_and_parses() {
    let config = MoneyConfig::default();
    for c in currency::all() {
        let m = Money::new(1_234_567, c.code).unwrap();
        let text = format::to_string(&m, &FormatOverrides::new(), &config).unwrap();
        let back = format::parse(&text, c.code, &FormatOverrides::new(), &config).unwrap();
        assert_eq!(back, m, "{} rendered as {:?}", c.code, text);
    }
}

/// Test JSON serialization round-trip through the storage shape.
#[test]
fn money_json_round_trip() {
    let m = Money::new(-1_005, "KWD").unwrap();
    let json = serde_json::to_string(&m).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["amount"], -1005);
    assert_eq!(value["currency"], "KWD");

    let back: Money = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);

    let stored: StoredMoney = serde_json::from_str(&json).unwrap();
    assert_eq!(Money::try_from(stored).unwrap(), m);
}

#[test]
fn storage_rejects_malformed_rows() {
    assert!(matches!(
        storage::parse_primitives("10.50", "USD"),
        Err(MoneyError::InvalidArgument(_))
    ));
    assert!(matches!(
        storage::parse_primitives("1050", "DOGE"),
        Err(MoneyError::InvalidArgument(_))
    ));
    assert_eq!(
        storage::parse_primitives("1050", "usd").unwrap(),
        Money::new(1050, "USD").unwrap()
    );
}

#[test]
fn config_from_json_drives_formatting() {
    let config = MoneyConfig::from_json(
        r#"{
            "default_currency": "CHF",
            "format": { "separator": "'", "symbol_space": true }
        }"#,
    )
    .unwrap();
    let m = storage::from_amount(123_456_789, &config).unwrap();
    assert_eq!(m.currency().as_str(), "CHF");
    assert_eq!(
        format::to_string(&m, &FormatOverrides::new(), &config).unwrap(),
        "CHF 1'234'567.89"
    );
    // Call-site options win over the process layer.
    assert_eq!(
        format::to_string(&m, &FormatOverrides::new().symbol(false), &config).unwrap(),
        "1'234'567.89"
    );
}

#[test]
fn allocation_by_ratios_is_exact() {
    let revenue = Money::new(1_000_001, "USD").unwrap();
    let parts = revenue.allocate(&[50, 30, 20]).unwrap();
    let amounts: Vec<i64> = parts.iter().map(|m| m.amount()).collect();
    assert_eq!(amounts, vec![500_001, 300_000, 200_000]);
}

#[test]
fn display_uses_builtin_defaults() {
    assert_eq!(Money::new(-250, "GBP").unwrap().to_string(), "£-2.50");
    assert_eq!(Money::new(123456, "SEK").unwrap().to_string(), "1,234.56kr");
}

#[test]
fn unknown_currency_never_becomes_a_value() {
    assert!(matches!(
        Money::new(500, "ZZZ"),
        Err(MoneyError::UnknownCurrency(_))
    ));
    assert!(Money::zero("ZZZ").is_err());
    assert!(Money::for_currency("ZZZ").is_err());
    let config = MoneyConfig::new(CurrencyCode::new("ZZZ"));
    assert!(storage::from_amount(1, &config).is_err());
}

#[test]
fn extreme_amounts_survive_format_and_parse() {
    let config = MoneyConfig::default();
    for amount in [i64::MIN, i64::MAX] {
        let m = Money::new(amount, "USD").unwrap();
        let text = format::to_string(&m, &FormatOverrides::new(), &config).unwrap();
        assert_eq!(format::parse(&text, "USD", &FormatOverrides::new(), &config).unwrap(), m);
    }
    assert!(matches!(
        Money::new(1, "EUR").unwrap().divide(i64::MAX),
        Err(MoneyError::InvalidArgument(_))
    ));
}
