//! Composite scoring model
//!
//! Two independent magnitude sub-scores combined by addition:
//! price movement contributes 0..=3, news polarity contributes 0..=2.
//! Direction never affects the score; only [`Mood`] carries it.

use super::Mood;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Highest possible composite score
pub const MAX_COMPOSITE: u8 = 5;

/// Score price movement magnitude
///
/// Boundaries belong to the higher bracket: |1| → 1, |2| → 2, |4| → 3.
pub fn price_subscore(change_pct: Decimal) -> u8 {
    let magnitude = change_pct.abs();
    if magnitude >= dec!(4) {
        3
    } else if magnitude >= dec!(2) {
        2
    } else if magnitude >= dec!(1) {
        1
    } else {
        0
    }
}

/// Score sentiment magnitude
pub fn sentiment_subscore(polarity: f64) -> u8 {
    if polarity <= -0.3 || polarity >= 0.3 {
        2
    } else if polarity <= -0.1 || polarity >= 0.1 {
        1
    } else {
        0
    }
}

/// Sum of both sub-scores, always in `0..=MAX_COMPOSITE`
pub fn composite(change_pct: Decimal, polarity: f64) -> u8 {
    price_subscore(change_pct) + sentiment_subscore(polarity)
}

/// Full scoring result for one symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub price: u8,
    pub sentiment: u8,
    pub mood: Mood,
}

impl Assessment {
    pub fn new(change_pct: Decimal, polarity: f64) -> Self {
        Self {
            price: price_subscore(change_pct),
            sentiment: sentiment_subscore(polarity),
            mood: Mood::from_polarity(polarity),
        }
    }

    pub fn composite(&self) -> u8 {
        self.price + self.sentiment
    }
}
