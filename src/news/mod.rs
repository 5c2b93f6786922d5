//! News sentiment gateway
//!
//! Fetches recent headlines for a company and reduces them to one polarity

mod google;
mod polarity;
mod types;

pub use google::{GoogleNewsClient, GoogleNewsConfig, GOOGLE_NEWS_RSS_URL};
pub use polarity::{LexiconScorer, PolarityScorer, ScoreError};
pub use types::SentimentObservation;

use crate::error::GatewayError;
use async_trait::async_trait;

/// Trait for news sentiment providers
#[async_trait]
pub trait NewsSentimentGateway: Send + Sync {
    /// Representative headline and averaged polarity for `company`
    ///
    /// A company with no headlines yields [`SentimentObservation::neutral`],
    /// not an error.
    async fn sentiment(&self, company: &str) -> Result<SentimentObservation, GatewayError>;
}
