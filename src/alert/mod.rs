//! Alerting core
//!
//! Scoring model, per-symbol throttle, and the bounded alert feed

mod feed;
pub mod scoring;
mod store;
mod throttle;
mod types;

pub use feed::{AlertFeed, DEFAULT_FEED_CAPACITY};
pub use scoring::{composite, price_subscore, sentiment_subscore, Assessment, MAX_COMPOSITE};
pub use store::AlertStore;
pub use throttle::AlertThrottle;
pub use types::{AlertRecord, Mood};
