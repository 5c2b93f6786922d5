//! Per-symbol alert cooldown

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Suppresses repeated alerts for the same symbol within a cooldown window
///
/// Entries are never expired; they are reinterpreted against `now` on
/// every check.
#[derive(Debug, Clone)]
pub struct AlertThrottle {
    cooldown: Duration,
    last_alert: HashMap<String, DateTime<Utc>>,
}

impl AlertThrottle {
    /// Create a throttle with the given cooldown
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_alert: HashMap::new(),
        }
    }

    /// Whether an alert for `symbol` is permitted at `now`
    ///
    /// The boundary instant (`now - last == cooldown`) is still throttled.
    pub fn may_alert(&self, symbol: &str, now: DateTime<Utc>) -> bool {
        match self.last_alert.get(symbol) {
            Some(last) => now - *last > self.cooldown,
            None => true,
        }
    }

    /// Record a fired alert. Call only after the decision to fire.
    ///
    /// A timestamp older than the stored one is ignored so entries only move forward.
    pub fn record_alert(&mut self, symbol: &str, now: DateTime<Utc>) {
        self.last_alert
            .entry(symbol.to_string())
            .and_modify(|last| {
                if now > *last {
                    *last = now;
                }
            })
            .or_insert(now);
    }

    /// Timestamp of the last alert for `symbol`
    pub fn last_alert(&self, symbol: &str) -> Option<DateTime<Utc>> {
        self.last_alert.get(symbol).copied()
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Number of symbols that have ever alerted
    pub fn len(&self) -> usize {
        self.last_alert.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_alert.is_empty()
    }
}
