//! Scan result types

use crate::alert::AlertRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Why a symbol produced no alert this cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Market data missing, insufficient or timed out
    NoPriceData,
    /// |change| below the price threshold
    BelowThreshold,
    /// Symbol is still cooling down from its last alert
    Throttled,
    /// Composite score under the minimum (composite gate only)
    ScoreTooLow,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::NoPriceData => "no_price_data",
            SkipReason::BelowThreshold => "below_threshold",
            SkipReason::Throttled => "throttled",
            SkipReason::ScoreTooLow => "score_too_low",
        }
    }
}

/// Result of evaluating one symbol
#[derive(Debug, Clone)]
pub enum Outcome {
    Fired(AlertRecord),
    Skipped(SkipReason),
}

/// Summary of one full pass over the tracked symbols
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub started_at: DateTime<Utc>,
    /// Alerts fired this cycle, in scan order
    pub fired: Vec<AlertRecord>,
    /// Symbols skipped this cycle, in scan order
    pub skipped: Vec<(String, SkipReason)>,
}

impl ScanReport {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            fired: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn record(&mut self, symbol: &str, outcome: Outcome) {
        match outcome {
            Outcome::Fired(record) => self.fired.push(record),
            Outcome::Skipped(reason) => self.skipped.push((symbol.to_string(), reason)),
        }
    }

    pub fn evaluated(&self) -> usize {
        self.fired.len() + self.skipped.len()
    }
}
