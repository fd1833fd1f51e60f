use std::sync::Arc;

use sentipulse_common::{BlendedSentiment, SentiPulseError};

use crate::config::ScoringConfig;
use crate::contextual::ContextualClassifier;
use crate::lexicon::LexiconScorer;
use crate::util::{round3, truncate_chars};

/// Combines the lexicon and contextual scorers into one labeled result.
///
/// The contextual model always decides the label; the lexicon side feeds the
/// confidence and is carried on the result for transparency. Disagreement
/// between the two is a confidence penalty, never an error.
pub struct HybridBlender {
    lexicon: Arc<dyn LexiconScorer>,
    contextual: Arc<dyn ContextualClassifier>,
    config: ScoringConfig,
}

impl HybridBlender {
    pub fn new(
        lexicon: Arc<dyn LexiconScorer>,
        contextual: Arc<dyn ContextualClassifier>,
        config: ScoringConfig,
    ) -> Self {
        Self {
            lexicon,
            contextual,
            config,
        }
    }

    pub async fn blend(
        &self,
        title: &str,
        content: &str,
    ) -> Result<BlendedSentiment, SentiPulseError> {
        let title_score = self.lexicon.score(title);
        let content_score = self
            .lexicon
            .score(truncate_chars(content, self.config.lexicon_content_cap));

        let blend_score = self.config.title_weight * title_score.polarity
            + self.config.content_weight * content_score.polarity;

        // Label follows the stronger of the two inputs; ties favor the title.
        let blend_label = if title_score.polarity.abs() >= content_score.polarity.abs() {
            title_score.label
        } else {
            content_score.label
        };

        let combined = format!(
            "{title}. {}",
            truncate_chars(content, self.config.combined_content_cap)
        );
        let contextual = self.contextual.classify(&combined).await?;

        let confidence = if blend_label == contextual.label {
            (blend_score.abs() + contextual.confidence) / 2.0
        } else {
            contextual.confidence * self.config.disagreement_penalty
        };

        Ok(BlendedSentiment {
            sentiment: contextual.label,
            confidence: round3(confidence),
            lexicon_label: blend_label,
            contextual_label: contextual.label,
        })
    }
}
