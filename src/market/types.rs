//! Market data types

use crate::error::GatewayError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Short-interval price change for one symbol. Produced per scan, never retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    /// Ticker symbol (e.g., "RELIANCE.NS")
    pub symbol: String,
    /// Percentage change between the last two bars, 2 decimal places
    pub change_pct: Decimal,
    /// When the observation was taken
    pub timestamp: DateTime<Utc>,
}

impl PriceObservation {
    pub fn new(symbol: impl Into<String>, change_pct: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            change_pct,
            timestamp: Utc::now(),
        }
    }
}

/// Percentage change between the last two closes, rounded to 2 places
pub fn last_change_pct(closes: &[Decimal]) -> Result<Decimal, GatewayError> {
    let [.., old, new] = closes else {
        return Err(GatewayError::InsufficientData(closes.len()));
    };

    if old.is_zero() {
        return Err(GatewayError::Decode("zero reference price".to_string()));
    }

    Ok(((*new - *old) / *old * dec!(100)).round_dp(2))
}

/// Change between the last two points of `series`, if there are two
pub fn change_from_series(series: &[Decimal]) -> Option<Decimal> {
    last_change_pct(series).ok()
}
