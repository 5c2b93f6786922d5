//! Configuration types for stock-pulse

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Tracked symbols, in scan order
    pub symbols: Vec<TrackedSymbol>,
    /// Symbols shown in the dashboard watchlist
    #[serde(default)]
    pub watchlist: Vec<String>,
    #[serde(default)]
    pub alert: AlertConfig,
    #[serde(default)]
    pub scanner: ScannerConfig,
    #[serde(default)]
    pub market_data: MarketDataConfig,
    #[serde(default)]
    pub news: NewsConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// A ticker and the company name used for news lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedSymbol {
    pub symbol: String,
    pub company: String,
}

impl TrackedSymbol {
    pub fn new(symbol: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            company: company.into(),
        }
    }
}

/// Which conditions must hold for an alert to fire
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GatePolicy {
    /// Price threshold AND composite score >= `min_composite`
    #[default]
    Composite,
    /// Price threshold only; composite is computed and logged but not gated on
    PriceOnly,
}

/// Alerting decision configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AlertConfig {
    /// Minimum absolute change percentage before news is consulted
    #[serde(default = "default_price_threshold")]
    pub price_threshold: Decimal,

    /// Per-symbol cooldown between alerts
    #[serde(default = "default_cooldown_minutes")]
    pub cooldown_minutes: u64,

    /// Minimum composite score (Composite gate only)
    #[serde(default = "default_min_composite")]
    pub min_composite: u8,

    #[serde(default)]
    pub gate: GatePolicy,

    /// Number of alerts retained in memory
    #[serde(default = "default_feed_capacity")]
    pub feed_capacity: usize,
}

fn default_price_threshold() -> Decimal {
    Decimal::new(15, 1) // 1.5%
}
fn default_cooldown_minutes() -> u64 {
    30
}

/// Longest accepted cooldown (one week)
pub const MAX_COOLDOWN_MINUTES: u64 = 7 * 24 * 60;
fn default_min_composite() -> u8 {
    3
}
fn default_feed_capacity() -> usize {
    20
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            price_threshold: default_price_threshold(),
            cooldown_minutes: default_cooldown_minutes(),
            min_composite: default_min_composite(),
            gate: GatePolicy::Composite,
            feed_capacity: default_feed_capacity(),
        }
    }
}

impl AlertConfig {
    /// Cooldown as a duration, saturating at [`MAX_COOLDOWN_MINUTES`]
    pub fn cooldown(&self) -> chrono::Duration {
        let minutes = self.cooldown_minutes.min(MAX_COOLDOWN_MINUTES) as i64;
        chrono::Duration::minutes(minutes)
    }
}

/// Scan loop configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScannerConfig {
    /// Pause between the end of one cycle and the start of the next
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Deadline for each individual gateway call
    #[serde(default = "default_gateway_timeout_secs")]
    pub gateway_timeout_secs: u64,
}

fn default_interval_secs() -> u64 {
    300
}
fn default_gateway_timeout_secs() -> u64 {
    10
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            gateway_timeout_secs: default_gateway_timeout_secs(),
        }
    }
}

impl ScannerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn gateway_timeout(&self) -> Duration {
        Duration::from_secs(self.gateway_timeout_secs)
    }
}

/// Market data provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MarketDataConfig {
    #[serde(default = "default_market_base_url")]
    pub base_url: String,
    /// Period requested from the chart endpoint
    #[serde(default = "default_range")]
    pub range: String,
    /// Bar interval requested from the chart endpoint
    #[serde(default = "default_bar_interval")]
    pub interval: String,
}

fn default_market_base_url() -> String {
    crate::market::YAHOO_CHART_URL.to_string()
}
fn default_range() -> String {
    "1d".to_string()
}
fn default_bar_interval() -> String {
    "5m".to_string()
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            base_url: default_market_base_url(),
            range: default_range(),
            interval: default_bar_interval(),
        }
    }
}

/// News feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NewsConfig {
    #[serde(default = "default_news_base_url")]
    pub base_url: String,
    /// Headlines considered per lookup
    #[serde(default = "default_max_headlines")]
    pub max_headlines: usize,
}

fn default_news_base_url() -> String {
    crate::news::GOOGLE_NEWS_RSS_URL.to_string()
}
fn default_max_headlines() -> usize {
    5
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            base_url: default_news_base_url(),
            max_headlines: default_max_headlines(),
        }
    }
}

/// Dashboard server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Alerts rendered on the page
    #[serde(default = "default_alert_limit")]
    pub alert_limit: usize,
    /// Entries per gainers/losers table
    #[serde(default = "default_movers_limit")]
    pub movers_limit: usize,
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    10000
}
fn default_alert_limit() -> usize {
    10
}
fn default_movers_limit() -> usize {
    5
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            alert_limit: default_alert_limit(),
            movers_limit: default_movers_limit(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format
    #[default]
    Pretty,
    /// JSON format for log aggregation
    Json,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Prometheus exporter port; exporter disabled when absent
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the scanner cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.symbols.is_empty() {
            anyhow::bail!("At least one [[symbols]] entry is required");
        }

        let mut seen = HashSet::new();
        for tracked in &self.symbols {
            if !seen.insert(tracked.symbol.as_str()) {
                anyhow::bail!("Duplicate symbol in configuration: {}", tracked.symbol);
            }
        }

        if let Some(missing) = self.watchlist.iter().find(|s| !seen.contains(s.as_str())) {
            anyhow::bail!("Watchlist symbol {} is not a tracked symbol", missing);
        }

        if self.alert.price_threshold <= Decimal::ZERO {
            anyhow::bail!(
                "alert.price_threshold must be positive, got {}",
                self.alert.price_threshold
            );
        }
        if self.alert.cooldown_minutes > MAX_COOLDOWN_MINUTES {
            anyhow::bail!(
                "alert.cooldown_minutes must be at most {}, got {}",
                MAX_COOLDOWN_MINUTES,
                self.alert.cooldown_minutes
            );
        }
        if self.alert.feed_capacity == 0 {
            anyhow::bail!("alert.feed_capacity must be at least 1");
        }
        if self.scanner.interval_secs == 0 {
            anyhow::bail!("scanner.interval_secs must be at least 1");
        }

        Ok(())
    }

    /// Look up a tracked symbol by ticker
    pub fn tracked(&self, symbol: &str) -> Option<&TrackedSymbol> {
        self.symbols.iter().find(|t| t.symbol == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const MINIMAL: &str = r#"
        [[symbols]]
        symbol = "RELIANCE.NS"
        company = "Reliance Industries"

        [[symbols]]
        symbol = "TCS.NS"
        company = "Tata Consultancy Services"
    "#;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml(MINIMAL).unwrap();
        assert_eq!(config.symbols.len(), 2);
        assert_eq!(config.alert.price_threshold, dec!(1.5));
        assert_eq!(config.alert.cooldown_minutes, 30);
        assert_eq!(config.alert.min_composite, 3);
        assert_eq!(config.alert.gate, GatePolicy::Composite);
        assert_eq!(config.alert.feed_capacity, 20);
        assert_eq!(config.scanner.interval_secs, 300);
        assert_eq!(config.dashboard.port, 10000);
        assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
        assert!(config.telemetry.metrics_port.is_none());
    }

    #[test]
    fn test_symbol_order_preserved() {
        let config = Config::from_toml(MINIMAL).unwrap();
        assert_eq!(config.symbols[0].symbol, "RELIANCE.NS");
        assert_eq!(config.symbols[1].symbol, "TCS.NS");
        assert_eq!(
            config.tracked("TCS.NS").unwrap().company,
            "Tata Consultancy Services"
        );
    }

    #[test]
    fn test_config_full() {
        let toml = r#"
            watchlist = ["AAPL"]

            [[symbols]]
            symbol = "AAPL"
            company = "Apple"

            [alert]
            price_threshold = 2.0
            cooldown_minutes = 15
            gate = "price_only"

            [scanner]
            interval_secs = 60
            gateway_timeout_secs = 5

            [telemetry]
            log_level = "debug"
            log_format = "json"
            metrics_port = 9090
        "#;

        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.alert.gate, GatePolicy::PriceOnly);
        assert_eq!(config.alert.cooldown(), chrono::Duration::minutes(15));
        assert_eq!(config.scanner.interval(), Duration::from_secs(60));
        assert_eq!(config.scanner.gateway_timeout(), Duration::from_secs(5));
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
        assert_eq!(config.telemetry.metrics_port, Some(9090));
    }

    #[test]
    fn test_reject_no_symbols() {
        let result = Config::from_toml("symbols = []");
        assert!(result.is_err());
    }

    #[test]
    fn test_reject_duplicate_symbol() {
        let toml = r#"
            [[symbols]]
            symbol = "AAPL"
            company = "Apple"

            [[symbols]]
            symbol = "AAPL"
            company = "Apple Inc"
        "#;
        let err = Config::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("Duplicate symbol"));
    }

    #[test]
    fn test_reject_untracked_watchlist() {
        let toml = r#"
            watchlist = ["MSFT"]

            [[symbols]]
            symbol = "AAPL"
            company = "Apple"
        "#;
        let err = Config::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("MSFT"));
    }

    #[test]
    fn test_reject_non_positive_threshold() {
        let toml = r#"
            [[symbols]]
            symbol = "AAPL"
            company = "Apple"

            [alert]
            price_threshold = 0
        "#;
        assert!(Config::from_toml(toml).is_err());
    }

    #[test]
    fn test_reject_oversized_cooldown() {
        let toml = r#"
            [[symbols]]
            symbol = "AAPL"
            company = "Apple"

            [alert]
            cooldown_minutes = 9223372036854775807
        "#;
        let err = Config::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("cooldown_minutes"));
    }

    #[test]
    fn test_cooldown_at_ceiling() {
        let toml = r#"
            [[symbols]]
            symbol = "AAPL"
            company = "Apple"

            [alert]
            cooldown_minutes = 10080
        "#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.alert.cooldown(), chrono::Duration::days(7));

        let unchecked = AlertConfig {
            cooldown_minutes: u64::MAX,
            ..AlertConfig::default()
        };
        assert_eq!(unchecked.cooldown(), chrono::Duration::days(7));
    }

    #[test]
    fn test_config_load_nonexistent() {
        let result = Config::load("/nonexistent/path/config.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, MINIMAL).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.symbols.len(), 2);
    }

    #[test]
    fn test_example_config_is_valid() {
        let config = Config::from_toml(include_str!("../config.toml.example")).unwrap();
        assert!(!config.symbols.is_empty());
        for symbol in &config.watchlist {
            assert!(config.tracked(symbol).is_some());
        }
    }
}
