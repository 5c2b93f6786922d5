//! Shared test gateways

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use stock_pulse::error::GatewayError;
use stock_pulse::market::{last_change_pct, MarketDataGateway, PriceObservation};
use stock_pulse::news::{NewsSentimentGateway, SentimentObservation};

/// Serves fixed close series per symbol; unknown symbols have no data
#[derive(Default)]
pub struct StaticMarket {
    pub series: HashMap<String, Vec<Decimal>>,
}

impl StaticMarket {
    pub fn with(mut self, symbol: &str, closes: Vec<Decimal>) -> Self {
        self.series.insert(symbol.to_string(), closes);
        self
    }
}

#[async_trait]
impl MarketDataGateway for StaticMarket {
    async fn change_pct(&self, symbol: &str) -> Result<PriceObservation, GatewayError> {
        let closes = self.intraday_series(symbol).await?;
        Ok(PriceObservation::new(symbol, last_change_pct(&closes)?))
    }

    async fn intraday_series(&self, symbol: &str) -> Result<Vec<Decimal>, GatewayError> {
        self.series
            .get(symbol)
            .cloned()
            .ok_or_else(|| GatewayError::NoData(symbol.to_string()))
    }
}

/// Serves a fixed polarity per company and counts requests
#[derive(Default)]
pub struct StaticNews {
    pub polarity: HashMap<String, f64>,
    pub calls: AtomicUsize,
}

impl StaticNews {
    pub fn with(mut self, company: &str, polarity: f64) -> Self {
        self.polarity.insert(company.to_string(), polarity);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NewsSentimentGateway for StaticNews {
    async fn sentiment(&self, company: &str) -> Result<SentimentObservation, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.polarity.get(company) {
            Some(polarity) => Ok(SentimentObservation {
                company: company.to_string(),
                headline: Some(format!("{} in the news", company)),
                polarity: *polarity,
                scored: 1,
            }),
            None => Err(GatewayError::Status(503)),
        }
    }
}
