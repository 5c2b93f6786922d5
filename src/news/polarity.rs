//! Headline polarity scoring
//!
//! Word-level lexicon scorer. Each headline gets the mean polarity of the
//! sentiment words it contains, in [-1, 1].

use std::collections::HashMap;
use thiserror::Error;

/// Why a headline could not be scored
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    /// Nothing left to score after tokenizing
    #[error("Headline has no scoreable text")]
    EmptyText,
}

/// Maps headline text to a polarity in [-1, 1]
pub trait PolarityScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<f64, ScoreError>;
}

const NEGATION_FACTOR: f64 = -0.5;
const INTENSIFIER_FACTOR: f64 = 1.3;
/// Tokens a negator reaches forward
const NEGATION_SPAN: usize = 2;

const LEXICON: &[(&str, f64)] = &[
    // positive
    ("beat", 0.5),
    ("beats", 0.5),
    ("best", 1.0),
    ("bullish", 0.6),
    ("boost", 0.4),
    ("boosts", 0.4),
    ("gain", 0.4),
    ("gains", 0.4),
    ("good", 0.7),
    ("great", 0.8),
    ("growth", 0.4),
    ("high", 0.16),
    ("jump", 0.4),
    ("jumps", 0.4),
    ("outperform", 0.5),
    ("positive", 0.23),
    ("profit", 0.4),
    ("profits", 0.4),
    ("rally", 0.5),
    ("rallies", 0.5),
    ("record", 0.3),
    ("rise", 0.3),
    ("rises", 0.3),
    ("soar", 0.6),
    ("soars", 0.6),
    ("strong", 0.43),
    ("success", 0.5),
    ("surge", 0.5),
    ("surges", 0.5),
    ("upgrade", 0.5),
    ("upgrades", 0.5),
    ("win", 0.8),
    ("wins", 0.8),
    // negative
    ("bad", -0.7),
    ("bearish", -0.6),
    ("crash", -0.8),
    ("crashes", -0.8),
    ("cut", -0.3),
    ("cuts", -0.3),
    ("decline", -0.4),
    ("declines", -0.4),
    ("downgrade", -0.5),
    ("downgrades", -0.5),
    ("drop", -0.4),
    ("drops", -0.4),
    ("fall", -0.4),
    ("falls", -0.4),
    ("fraud", -0.9),
    ("loss", -0.5),
    ("losses", -0.5),
    ("low", -0.2),
    ("miss", -0.4),
    ("misses", -0.4),
    ("negative", -0.3),
    ("plunge", -0.7),
    ("plunges", -0.7),
    ("probe", -0.3),
    ("slump", -0.6),
    ("slumps", -0.6),
    ("tumble", -0.6),
    ("tumbles", -0.6),
    ("weak", -0.38),
    ("worst", -1.0),
];

const NEGATORS: &[&str] = &["not", "no", "never", "without", "isn't", "aren't", "won't", "don't"];

const INTENSIFIERS: &[&str] = &[
    "very",
    "sharply",
    "strongly",
    "significantly",
    "massive",
    "huge",
    "extremely",
];

/// Lexicon-based polarity scorer
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: HashMap<String, f64>,
}

impl LexiconScorer {
    /// Scorer with the built-in financial headline lexicon
    pub fn new() -> Self {
        Self::with_entries(LEXICON.iter().map(|(w, p)| (w.to_string(), *p)))
    }

    /// Scorer with a custom lexicon; values are clamped to [-1, 1]
    pub fn with_entries(entries: impl IntoIterator<Item = (String, f64)>) -> Self {
        let lexicon = entries
            .into_iter()
            .map(|(word, polarity)| (word.to_lowercase(), polarity.clamp(-1.0, 1.0)))
            .collect();
        Self { lexicon }
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<f64, ScoreError> {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.is_empty() {
            return Err(ScoreError::EmptyText);
        }

        let mut matched = Vec::new();
        let mut negate_left = 0usize;
        let mut intensify = false;

        for token in tokens {
            if NEGATORS.contains(&token) {
                negate_left = NEGATION_SPAN;
                continue;
            }
            if INTENSIFIERS.contains(&token) {
                intensify = true;
                continue;
            }

            if let Some(base) = self.lexicon.get(token) {
                let mut polarity = *base;
                if intensify {
                    polarity *= INTENSIFIER_FACTOR;
                }
                if negate_left > 0 {
                    polarity *= NEGATION_FACTOR;
                    negate_left = 0;
                }
                matched.push(polarity.clamp(-1.0, 1.0));
            } else {
                negate_left = negate_left.saturating_sub(1);
            }
            intensify = false;
        }

        if matched.is_empty() {
            return Ok(0.0);
        }

        let mean = matched.iter().sum::<f64>() / matched.len() as f64;
        Ok(mean.clamp(-1.0, 1.0))
    }
}
