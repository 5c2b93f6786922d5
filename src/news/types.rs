//! News sentiment types

use super::PolarityScorer;
use serde::{Deserialize, Serialize};

/// Averaged headline sentiment for one company. Ephemeral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentObservation {
    /// Company display name the lookup was made for
    pub company: String,
    /// Representative (first) headline
    pub headline: Option<String>,
    /// Mean polarity over scored headlines, in [-1, 1]
    pub polarity: f64,
    /// Number of headlines that contributed to `polarity`
    pub scored: usize,
}

impl SentimentObservation {
    /// "No sentiment data": neutral polarity, no headline
    pub fn neutral(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            headline: None,
            polarity: 0.0,
            scored: 0,
        }
    }

    /// Score `titles` and average the results
    ///
    /// Titles the scorer rejects are left out of the average. When nothing
    /// could be scored the observation is neutral.
    pub fn from_headlines<S: PolarityScorer + ?Sized>(
        company: impl Into<String>,
        titles: &[String],
        scorer: &S,
    ) -> Self {
        let company = company.into();
        let scores: Vec<f64> = titles
            .iter()
            .filter_map(|title| match scorer.score(title) {
                Ok(polarity) => Some(polarity),
                Err(e) => {
                    tracing::debug!(title = %title, error = %e, "Skipping unscoreable headline");
                    None
                }
            })
            .collect();

        if scores.is_empty() {
            return Self::neutral(company);
        }

        Self {
            company,
            headline: titles.first().cloned(),
            polarity: scores.iter().sum::<f64>() / scores.len() as f64,
            scored: scores.len(),
        }
    }

    pub fn has_data(&self) -> bool {
        self.scored > 0
    }
}
