//! Shared alert state
//!
//! The scanner is the only writer; the dashboard only reads snapshots.
//! Feed and throttle live behind one lock so a fired alert is observed
//! with both its feed entry and its cooldown in place.

use super::{AlertFeed, AlertRecord, AlertThrottle};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

struct AlertState {
    feed: AlertFeed,
    throttle: AlertThrottle,
}

/// Cloneable handle to the process-wide alert state
#[derive(Clone)]
pub struct AlertStore {
    state: Arc<RwLock<AlertState>>,
}

impl AlertStore {
    /// Create an empty store
    pub fn new(feed_capacity: usize, cooldown: Duration) -> Self {
        Self {
            state: Arc::new(RwLock::new(AlertState {
                feed: AlertFeed::new(feed_capacity),
                throttle: AlertThrottle::new(cooldown),
            })),
        }
    }

    /// Whether the throttle currently permits an alert for `symbol`
    pub async fn may_alert(&self, symbol: &str, now: DateTime<Utc>) -> bool {
        let state = self.state.read().await;
        state.throttle.may_alert(symbol, now)
    }

    /// Publish a fired alert and start its symbol's cooldown
    ///
    /// Returns the feed length after insertion.
    pub async fn publish(&self, record: AlertRecord) -> usize {
        let mut state = self.state.write().await;
        state.throttle.record_alert(&record.symbol, record.fired_at);
        state.feed.push(record);
        state.feed.len()
    }

    /// Newest-first copy of up to `limit` alerts
    pub async fn snapshot(&self, limit: usize) -> Vec<AlertRecord> {
        let state = self.state.read().await;
        state.feed.snapshot(limit)
    }

    pub async fn last_alert(&self, symbol: &str) -> Option<DateTime<Utc>> {
        let state = self.state.read().await;
        state.throttle.last_alert(symbol)
    }

    pub async fn feed_len(&self) -> usize {
        self.state.read().await.feed.len()
    }

    pub async fn feed_capacity(&self) -> usize {
        self.state.read().await.feed.capacity()
    }
}
