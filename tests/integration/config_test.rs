//! Configuration loading tests

use rust_decimal_macros::dec;
use std::io::Write;
use stock_pulse::config::{Config, GatePolicy};

#[test]
fn test_example_config_loads() {
    let config = Config::from_toml(include_str!("../../config.toml.example")).unwrap();
    assert!(!config.symbols.is_empty());
    assert_eq!(config.alert.price_threshold, dec!(1.5));
    assert_eq!(config.alert.cooldown_minutes, 30);
    assert_eq!(config.scanner.interval_secs, 300);
    assert_eq!(config.dashboard.port, 10000);
    for symbol in &config.watchlist {
        assert!(config.tracked(symbol).is_some());
    }
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [[symbols]]
        symbol = "TCS.NS"
        company = "Tata Consultancy Services"

        [alert]
        gate = "price_only"
        "#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.symbols[0].company, "Tata Consultancy Services");
    assert_eq!(config.alert.gate, GatePolicy::PriceOnly);
}

#[test]
fn test_missing_file_is_error() {
    assert!(Config::load("/nonexistent/stock-pulse.toml").is_err());
}
