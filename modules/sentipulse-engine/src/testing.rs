// Test mocks for the scoring pipeline.
//
// Two mocks matching the two engine trait boundaries:
// - FixedLexicon (LexiconScorer) — HashMap-based text→polarity, neutral fallback
// - MockClassifier (ContextualClassifier) — HashMap-based text→classification
//
// Both use builder-style registration like the rest of the test harness.

use std::collections::HashMap;

use async_trait::async_trait;

use sentipulse_common::{
    Classification, ContentItem, PolarityScore, SentiPulseError, SentimentLabel, SourceKind,
};

use crate::contextual::ContextualClassifier;
use crate::lexicon::LexiconScorer;

// ---------------------------------------------------------------------------
// FixedLexicon
// ---------------------------------------------------------------------------

/// Deterministic lexicon scorer. Registered texts get exact scores;
/// everything else (including empty text) scores neutral 0.0.
pub struct FixedLexicon {
    scores: HashMap<String, PolarityScore>,
}

impl FixedLexicon {
    pub fn new() -> Self {
        Self {
            scores: HashMap::new(),
        }
    }

    pub fn on_text(mut self, text: &str, label: SentimentLabel, polarity: f64) -> Self {
        self.scores
            .insert(text.to_string(), PolarityScore { label, polarity });
        self
    }
}

impl Default for FixedLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer for FixedLexicon {
    fn score(&self, text: &str) -> PolarityScore {
        self.scores.get(text).copied().unwrap_or(PolarityScore {
            label: SentimentLabel::Neutral,
            polarity: 0.0,
        })
    }
}

// ---------------------------------------------------------------------------
// MockClassifier
// ---------------------------------------------------------------------------

/// HashMap-based contextual classifier. Returns `Err` for unregistered text
/// unless a default is set; `.failing()` makes every call error.
pub struct MockClassifier {
    classifications: HashMap<String, Classification>,
    default: Option<Classification>,
    fail_all: bool,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self {
            classifications: HashMap::new(),
            default: None,
            fail_all: false,
        }
    }

    pub fn on_text(mut self, text: &str, label: SentimentLabel, confidence: f64) -> Self {
        self.classifications
            .insert(text.to_string(), Classification { label, confidence });
        self
    }

    /// Set a classification for any text not explicitly registered.
    pub fn with_default(mut self, label: SentimentLabel, confidence: f64) -> Self {
        self.default = Some(Classification { label, confidence });
        self
    }

    /// Make every call return a `Classifier` error.
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContextualClassifier for MockClassifier {
    async fn classify(&self, text: &str) -> Result<Classification, SentiPulseError> {
        if self.fail_all {
            return Err(SentiPulseError::Classifier(
                "MockClassifier: forced failure".to_string(),
            ));
        }
        self.classifications
            .get(text)
            .copied()
            .or(self.default)
            .ok_or_else(|| {
                SentiPulseError::Classifier(format!(
                    "MockClassifier: no classification registered for {text:?}"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Create a news item with engagement 1 (the fetch layer's convention).
pub fn news_item(text: &str) -> ContentItem {
    ContentItem {
        source: SourceKind::News,
        text: text.to_string(),
        engagement: 1,
    }
}

/// Create a social post item with explicit engagement.
pub fn post_item(text: &str, engagement: u64) -> ContentItem {
    ContentItem {
        source: SourceKind::Twitter,
        text: text.to_string(),
        engagement,
    }
}
