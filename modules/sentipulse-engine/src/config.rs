/// Tunable constants of the scoring pipeline.
///
/// Constructed once at startup and handed to the engines by value; nothing
/// here is adjustable per call. `Default` is the canonical embodiment.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Lexicon polarity at or above this is labeled Positive.
    pub positive_threshold: f64,
    /// Lexicon polarity at or below this is labeled Negative.
    pub negative_threshold: f64,
    /// Title weight in the lexicon blend score.
    pub title_weight: f64,
    /// Content weight in the lexicon blend score.
    pub content_weight: f64,
    /// Content cap (chars) for lexicon scoring. Heuristic noise reduction:
    /// article bodies past the lede dilute the polarity signal.
    pub lexicon_content_cap: usize,
    /// Content cap (chars) when building the combined text for the contextual
    /// model. Heuristic noise reduction, distinct from the model's own limit.
    pub combined_content_cap: usize,
    /// Hard input cap (chars) of the contextual model. Text beyond this is
    /// truncated before the inference request.
    pub max_context_chars: usize,
    /// Confidence multiplier applied when the two models disagree.
    pub disagreement_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            positive_threshold: 0.05,
            negative_threshold: -0.05,
            title_weight: 0.6,
            content_weight: 0.4,
            lexicon_content_cap: 500,
            combined_content_cap: 600,
            max_context_chars: 512,
            disagreement_penalty: 0.7,
        }
    }
}
