use std::sync::Arc;

use futures::{stream, StreamExt};
use serde::Serialize;
use tracing::warn;

use sentipulse_common::{ContentItem, SentimentResult, SourceKind};

use crate::blend::HybridBlender;

/// Default width of the scoring worker pool. Blends are I/O-bound on the
/// contextual model; the engines themselves are shared read-only.
pub const DEFAULT_SCORING_CONCURRENCY: usize = 4;

/// Outcome of scoring one content item. A failed blend marks the item and
/// leaves the rest of the batch intact.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemAnalysis {
    Scored(SentimentResult),
    Failed { source: SourceKind, error: String },
}

impl ItemAnalysis {
    pub fn result(&self) -> Option<&SentimentResult> {
        match self {
            ItemAnalysis::Scored(result) => Some(result),
            ItemAnalysis::Failed { .. } => None,
        }
    }
}

/// Extract the successfully scored results from a batch, preserving order.
pub fn scored_results(analyses: &[ItemAnalysis]) -> Vec<SentimentResult> {
    analyses.iter().filter_map(|a| a.result().copied()).collect()
}

/// Scores batches of content items through the hybrid blender.
///
/// Items are independent, so they run through an ordered bounded-concurrency
/// stream: output position matches input position regardless of completion
/// order.
pub struct ItemAnalyzer {
    blender: Arc<HybridBlender>,
    concurrency: usize,
}

impl ItemAnalyzer {
    pub fn new(blender: Arc<HybridBlender>) -> Self {
        Self {
            blender,
            concurrency: DEFAULT_SCORING_CONCURRENCY,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Score every item. Returns one analysis per item, in input order.
    ///
    /// Batch items carry their full text in `text`; the blender's content
    /// parameter stays empty here. The title/content split is exercised by
    /// the per-article detail path.
    pub async fn analyze(&self, items: &[ContentItem]) -> Vec<ItemAnalysis> {
        stream::iter(items)
            .map(|item| {
                let blender = Arc::clone(&self.blender);
                async move {
                    match blender.blend(&item.text, "").await {
                        Ok(blended) => {
                            ItemAnalysis::Scored(blended.tagged(item.source, item.engagement))
                        }
                        Err(e) => {
                            warn!(source = %item.source, error = %e, "Item scoring failed");
                            ItemAnalysis::Failed {
                                source: item.source,
                                error: e.to_string(),
                            }
                        }
                    }
                }
            })
            .buffered(self.concurrency)
            .collect()
            .await
    }
}
