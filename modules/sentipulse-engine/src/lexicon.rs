use vader_sentiment::SentimentIntensityAnalyzer;

use sentipulse_common::{PolarityScore, SentimentLabel};

use crate::config::ScoringConfig;

// --- LexiconScorer trait ---

/// Rule-based sentiment over arbitrary-length text. Pure and deterministic
/// given the same lexicon resource; no truncation.
pub trait LexiconScorer: Send + Sync {
    fn score(&self, text: &str) -> PolarityScore;
}

/// Threshold policy on a compound polarity in [-1, 1].
pub fn threshold_label(polarity: f64, config: &ScoringConfig) -> SentimentLabel {
    if polarity >= config.positive_threshold {
        SentimentLabel::Positive
    } else if polarity <= config.negative_threshold {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

// --- VADER scorer ---

/// Lexicon scorer backed by the VADER compound score.
///
/// The analyzer loads its lexicon at construction; build one per process and
/// share it read-only.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
    config: ScoringConfig,
}

impl VaderScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
            config: config.clone(),
        }
    }
}

impl LexiconScorer for VaderScorer {
    fn score(&self, text: &str) -> PolarityScore {
        // Empty or whitespace text is valid neutral input, not an error.
        if text.trim().is_empty() {
            return PolarityScore {
                label: SentimentLabel::Neutral,
                polarity: 0.0,
            };
        }

        let scores = self.analyzer.polarity_scores(text);
        let polarity = scores.get("compound").copied().unwrap_or(0.0);

        PolarityScore {
            label: threshold_label(polarity, &self.config),
            polarity,
        }
    }
}
