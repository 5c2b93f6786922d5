//! Gateway error taxonomy
//!
//! Every variant means "no usable data for this symbol right now". The
//! scanner turns all of them into a silent skip; nothing here is fatal.

use std::time::Duration;
use thiserror::Error;

/// Errors returned by the market data and news gateways
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport-level failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Provider answered with a non-success status
    #[error("Provider returned status {0}")]
    Status(u16),
    /// Response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// Fewer than two price points in the period
    #[error("Insufficient data: {0} price point(s)")]
    InsufficientData(usize),
    /// Provider had nothing for this symbol
    #[error("No data for {0}")]
    NoData(String),
    /// Call exceeded the configured deadline
    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

impl GatewayError {
    /// Short label used for metrics and log fields
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Http(_) => "http",
            GatewayError::Status(_) => "status",
            GatewayError::Decode(_) => "decode",
            GatewayError::InsufficientData(_) => "insufficient_data",
            GatewayError::NoData(_) => "no_data",
            GatewayError::Timeout(_) => "timeout",
        }
    }
}
