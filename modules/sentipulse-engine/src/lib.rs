pub mod aggregate;
pub mod analyzer;
pub mod blend;
pub mod config;
pub mod contextual;
pub mod lexicon;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
mod util;

pub use aggregate::{aggregate_by_source, aggregate_global};
pub use analyzer::{scored_results, ItemAnalysis, ItemAnalyzer};
pub use blend::HybridBlender;
pub use config::ScoringConfig;
pub use contextual::{ContextualClassifier, HuggingFaceClassifier};
pub use lexicon::{LexiconScorer, VaderScorer};
