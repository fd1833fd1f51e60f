use serde::{Deserialize, Serialize};

// --- Enums ---

/// Where a content item came from. Each source is aggregated separately
/// before contributing to the global score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    News,
    Twitter,
    Reddit,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::News => write!(f, "news"),
            SourceKind::Twitter => write!(f, "twitter"),
            SourceKind::Reddit => write!(f, "reddit"),
        }
    }
}

impl SourceKind {
    pub fn from_str_loose(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "twitter" | "x" => SourceKind::Twitter,
            "reddit" => SourceKind::Reddit,
            _ => SourceKind::News,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Neutral => write!(f, "neutral"),
            SentimentLabel::Negative => write!(f, "negative"),
        }
    }
}

impl SentimentLabel {
    /// Signed score used by aggregation: Positive → +1, Neutral → 0, Negative → -1.
    pub fn signed_score(&self) -> f64 {
        match self {
            SentimentLabel::Positive => 1.0,
            SentimentLabel::Neutral => 0.0,
            SentimentLabel::Negative => -1.0,
        }
    }
}

// --- Inbound items ---

/// A single piece of content handed to the analyzer by the fetch layer.
/// `engagement` is carried through to the result unchanged; aggregation does
/// not weight by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub source: SourceKind,
    pub text: String,
    pub engagement: u64,
}

// --- Scorer outputs ---

/// Lexicon scorer output: compound polarity in [-1, 1] plus the label derived
/// from the threshold policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScore {
    pub label: SentimentLabel,
    pub polarity: f64,
}

/// Contextual classifier output: discrete label plus model confidence in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: SentimentLabel,
    pub confidence: f64,
}

// --- Blended results ---

/// The hybrid blend of both scorers for one (title, content) pair.
/// Carries both component labels unchanged so consumers can surface
/// divergence between the two models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendedSentiment {
    pub sentiment: SentimentLabel,
    pub confidence: f64,
    pub lexicon_label: SentimentLabel,
    pub contextual_label: SentimentLabel,
}

impl BlendedSentiment {
    /// True when the two underlying models disagree on the label.
    /// Informational only; the contextual label still decides.
    pub fn is_divergent(&self) -> bool {
        self.lexicon_label != self.contextual_label
    }

    /// Attach the originating item's source and engagement.
    pub fn tagged(self, source: SourceKind, engagement: u64) -> SentimentResult {
        SentimentResult {
            sentiment: self.sentiment,
            confidence: self.confidence,
            lexicon_label: self.lexicon_label,
            contextual_label: self.contextual_label,
            source,
            engagement,
        }
    }
}

/// A blended sentiment tagged with its originating item. Immutable once built;
/// consumed by aggregation and presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: SentimentLabel,
    pub confidence: f64,
    pub lexicon_label: SentimentLabel,
    pub contextual_label: SentimentLabel,
    pub source: SourceKind,
    pub engagement: u64,
}
