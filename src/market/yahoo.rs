//! Yahoo Finance chart API client
//!
//! Pulls the day's 5-minute bars for a ticker and derives the change between
//! the last two closes.

use super::{last_change_pct, MarketDataGateway, PriceObservation};
use crate::config::MarketDataConfig;
use crate::error::GatewayError;
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

/// Yahoo chart API base URL
pub const YAHOO_CHART_URL: &str = "https://query1.finance.yahoo.com";

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) stock-pulse/0.1";

/// Configuration for the Yahoo client
#[derive(Debug, Clone)]
pub struct YahooConfig {
    /// Base URL for the chart API
    pub base_url: String,
    /// Requested period (e.g., "1d")
    pub range: String,
    /// Requested bar interval (e.g., "5m")
    pub interval: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            base_url: YAHOO_CHART_URL.to_string(),
            range: "1d".to_string(),
            interval: "5m".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl YahooConfig {
    pub fn from_settings(settings: &MarketDataConfig, timeout: Duration) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            range: settings.range.clone(),
            interval: settings.interval.clone(),
            timeout,
        }
    }
}

/// Client for the Yahoo Finance chart endpoint
pub struct YahooClient {
    config: YahooConfig,
    client: Client,
}

impl YahooClient {
    /// Create a new client with custom configuration
    pub fn with_config(config: YahooConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { config, client })
    }

    fn chart_url(&self, symbol: &str) -> String {
        format!("{}/v8/finance/chart/{}", self.config.base_url, symbol)
    }

    /// Fetch the non-null closes for the configured period
    async fn fetch_closes(&self, symbol: &str) -> Result<Vec<Decimal>, GatewayError> {
        let url = self.chart_url(symbol);

        tracing::debug!(url = %url, symbol, "Fetching chart from Yahoo");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("range", self.config.range.as_str()),
                ("interval", self.config.interval.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GatewayError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        parse_closes(&body, symbol)
    }
}

#[async_trait]
impl MarketDataGateway for YahooClient {
    async fn change_pct(&self, symbol: &str) -> Result<PriceObservation, GatewayError> {
        let closes = self.fetch_closes(symbol).await?;
        let change = last_change_pct(&closes)?;
        Ok(PriceObservation::new(symbol, change))
    }

    async fn intraday_series(&self, symbol: &str) -> Result<Vec<Decimal>, GatewayError> {
        self.fetch_closes(symbol).await
    }
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    indicators: Indicators,
}

#[derive(Debug, Default, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteSeries>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteSeries {
    /// Bars with no trades come back as null
    #[serde(default)]
    close: Vec<Option<Decimal>>,
}

/// Extract non-null closes from a chart response body
fn parse_closes(body: &str, symbol: &str) -> Result<Vec<Decimal>, GatewayError> {
    let envelope: ChartEnvelope =
        serde_json::from_str(body).map_err(|e| GatewayError::Decode(e.to_string()))?;

    if let Some(err) = envelope.chart.error {
        tracing::debug!(
            symbol,
            code = %err.code,
            description = err.description.as_deref().unwrap_or(""),
            "Yahoo chart error"
        );
        return Err(GatewayError::NoData(symbol.to_string()));
    }

    let result = envelope
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| GatewayError::NoData(symbol.to_string()))?;

    Ok(result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close.into_iter().flatten().collect())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const CHART: &str = r#"{
        "chart": {
            "result": [{
                "meta": {"symbol": "RELIANCE.NS", "currency": "INR"},
                "timestamp": [1704067200, 1704067500, 1704067800, 1704068100],
                "indicators": {
                    "quote": [{
                        "open": [100.0, 101.0, null, 102.0],
                        "close": [100.0, 101.0, null, 103.5]
                    }]
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn test_chart_url() {
        let client = YahooClient::with_config(YahooConfig::default()).unwrap();
        assert_eq!(
            client.chart_url("TCS.NS"),
            "https://query1.finance.yahoo.com/v8/finance/chart/TCS.NS"
        );
    }

    #[test]
    fn test_parse_closes_skips_nulls() {
        let closes = parse_closes(CHART, "RELIANCE.NS").unwrap();
        assert_eq!(closes, vec![dec!(100.0), dec!(101.0), dec!(103.5)]);
    }

    #[test]
    fn test_parse_chart_error() {
        let body = r#"{"chart": {"result": null, "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}}}"#;
        let result = parse_closes(body, "BOGUS");
        assert!(matches!(result, Err(GatewayError::NoData(_))));
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_closes("not json", "X");
        assert!(matches!(result, Err(GatewayError::Decode(_))));
    }

    #[test]
    fn test_parse_missing_quotes() {
        let body = r#"{"chart": {"result": [{"meta": {}}], "error": null}}"#;
        assert!(parse_closes(body, "X").unwrap().is_empty());
    }

    #[test]
    fn test_last_change_pct() {
        let closes = parse_closes(CHART, "RELIANCE.NS").unwrap();
        // (103.5 - 101) / 101 * 100 = 2.4752...
        assert_eq!(last_change_pct(&closes).unwrap(), dec!(2.48));
    }

    #[test]
    fn test_config_from_settings() {
        let settings = MarketDataConfig::default();
        let config = YahooConfig::from_settings(&settings, Duration::from_secs(3));
        assert_eq!(config.base_url, YAHOO_CHART_URL);
        assert_eq!(config.interval, "5m");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
