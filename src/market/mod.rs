//! Market data gateway
//!
//! Per-symbol price change and intraday closes from a chart provider

mod types;
mod yahoo;

pub use types::{change_from_series, last_change_pct, PriceObservation};
pub use yahoo::{YahooClient, YahooConfig, YAHOO_CHART_URL};

use crate::error::GatewayError;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for market data providers
#[async_trait]
pub trait MarketDataGateway: Send + Sync {
    /// Latest short-interval change percentage for `symbol`
    ///
    /// Fails with [`GatewayError::InsufficientData`] when fewer than two
    /// price points exist in the period.
    async fn change_pct(&self, symbol: &str) -> Result<PriceObservation, GatewayError>;

    /// Intraday closing prices, oldest first. Used by the dashboard only.
    async fn intraday_series(&self, symbol: &str) -> Result<Vec<Decimal>, GatewayError>;
}
