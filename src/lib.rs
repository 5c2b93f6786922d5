//! stock-pulse: price/news-sentiment alert engine
//!
//! This library provides the core components for:
//! - Short-interval price change from a market data provider
//! - Headline polarity from a news feed
//! - Composite scoring of price and sentiment magnitude
//! - Per-symbol alert cooldown and a bounded alert feed
//! - A periodic scan loop tying them together
//! - A web dashboard over the alert feed and live market views
//! - Logging and Prometheus metrics

pub mod alert;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod market;
pub mod news;
pub mod scanner;
pub mod telemetry;
