//! Alert types

use chrono::{DateTime, Local, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Qualitative direction of the news behind an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Positive,
    Negative,
}

impl Mood {
    /// Negative iff polarity < 0. Exactly 0 (including "no news") is Positive.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity < 0.0 {
            Mood::Negative
        } else {
            Mood::Positive
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mood::Positive => write!(f, "Positive"),
            Mood::Negative => write!(f, "Negative"),
        }
    }
}

/// A fired alert. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRecord {
    /// Unique alert identifier
    pub id: Uuid,
    /// Ticker the alert fired for
    pub symbol: String,
    /// Company display name
    pub company: String,
    /// Price change percentage that triggered the alert
    pub change_pct: Decimal,
    /// Averaged headline polarity
    pub polarity: f64,
    /// Composite score at fire time
    pub score: u8,
    pub mood: Mood,
    /// Representative headline, if any news was found
    pub headline: Option<String>,
    /// Wall-clock fire time
    pub fired_at: DateTime<Utc>,
}

impl AlertRecord {
    /// Fire time as HH:MM in the server's local time zone
    pub fn display_time(&self) -> String {
        self.fired_at.with_timezone(&Local).format("%H:%M").to_string()
    }
}
