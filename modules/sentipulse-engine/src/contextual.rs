use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use sentipulse_common::{Classification, SentiPulseError, SentimentLabel};

use crate::config::ScoringConfig;
use crate::util::truncate_chars;

// --- ContextualClassifier trait ---

/// Pretrained neural sentiment classifier. Deterministic given fixed model
/// weights; input beyond the model's limit is truncated by the implementation.
#[async_trait]
pub trait ContextualClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Classification, SentiPulseError>;
}

/// Map a raw model tag to a canonical label.
///
/// `LABEL_n` tags come from checkpoints published without id2label metadata;
/// the word forms come from properly configured ones and are matched
/// case-insensitively. Anything else is a model/version mismatch and must
/// surface as an error instead of a silent default.
pub fn canonical_label(raw: &str) -> Result<SentimentLabel, SentiPulseError> {
    match raw {
        "LABEL_0" => Ok(SentimentLabel::Negative),
        "LABEL_1" => Ok(SentimentLabel::Neutral),
        "LABEL_2" => Ok(SentimentLabel::Positive),
        _ => match raw.to_lowercase().as_str() {
            "negative" => Ok(SentimentLabel::Negative),
            "neutral" => Ok(SentimentLabel::Neutral),
            "positive" => Ok(SentimentLabel::Positive),
            _ => Err(SentiPulseError::UnknownLabel(raw.to_string())),
        },
    }
}

// --- Hosted inference classifier ---

/// Classifier backed by a hosted text-classification inference endpoint
/// (multilingual RoBERTa sentiment in the current deployment).
pub struct HuggingFaceClassifier {
    client: reqwest::Client,
    url: String,
    api_key: String,
    max_context_chars: usize,
}

#[derive(Debug, Deserialize)]
struct RawPrediction {
    label: String,
    score: f64,
}

impl HuggingFaceClassifier {
    pub fn new(url: &str, api_key: &str, config: &ScoringConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            url: url.to_string(),
            api_key: api_key.to_string(),
            max_context_chars: config.max_context_chars,
        }
    }
}

#[async_trait]
impl ContextualClassifier for HuggingFaceClassifier {
    async fn classify(&self, text: &str) -> Result<Classification, SentiPulseError> {
        // Empty text is valid input; skip the round-trip.
        if text.trim().is_empty() {
            return Ok(Classification {
                label: SentimentLabel::Neutral,
                confidence: 0.0,
            });
        }

        let input = truncate_chars(text, self.max_context_chars);
        debug!(chars = input.chars().count(), "Classifying text");

        let body = serde_json::json!({ "inputs": input });
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SentiPulseError::Classifier(format!("inference request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SentiPulseError::Classifier(format!(
                "inference returned {}",
                response.status()
            )));
        }

        // One row of ranked candidates per input; we send exactly one input.
        let predictions: Vec<Vec<RawPrediction>> = response
            .json()
            .await
            .map_err(|e| SentiPulseError::Classifier(format!("malformed inference response: {e}")))?;

        let best = predictions
            .into_iter()
            .flatten()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or_else(|| SentiPulseError::Classifier("empty prediction set".to_string()))?;

        Ok(Classification {
            label: canonical_label(&best.label)?,
            confidence: best.score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_label_maps_raw_tags() {
        assert_eq!(canonical_label("LABEL_0").unwrap(), SentimentLabel::Negative);
        assert_eq!(canonical_label("LABEL_1").unwrap(), SentimentLabel::Neutral);
        assert_eq!(canonical_label("LABEL_2").unwrap(), SentimentLabel::Positive);
    }

    #[test]
    fn canonical_label_maps_word_tags_case_insensitively() {
        assert_eq!(canonical_label("positive").unwrap(), SentimentLabel::Positive);
        assert_eq!(canonical_label("Neutral").unwrap(), SentimentLabel::Neutral);
        assert_eq!(canonical_label("NEGATIVE").unwrap(), SentimentLabel::Negative);
    }

    #[test]
    fn canonical_label_rejects_unknown_tags() {
        for raw in ["LABEL_3", "bullish", ""] {
            match canonical_label(raw) {
                Err(SentiPulseError::UnknownLabel(tag)) => assert_eq!(tag, raw),
                other => panic!("expected UnknownLabel for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn raw_predictions_deserialize() {
        let json = r#"[[{"label": "positive", "score": 0.91},
                        {"label": "neutral", "score": 0.06},
                        {"label": "negative", "score": 0.03}]]"#;
        let parsed: Vec<Vec<RawPrediction>> = serde_json::from_str(json).unwrap();
        let best = parsed
            .into_iter()
            .flatten()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .unwrap();
        assert_eq!(best.label, "positive");
        assert_eq!(best.score, 0.91);
    }

    #[tokio::test]
    async fn empty_text_classifies_neutral_without_a_request() {
        // Unroutable endpoint: any network attempt would error.
        let classifier = HuggingFaceClassifier::new(
            "http://127.0.0.1:0/invalid",
            "test-key",
            &ScoringConfig::default(),
        );
        let result = classifier.classify("   ").await.unwrap();
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.confidence, 0.0);
    }
}
