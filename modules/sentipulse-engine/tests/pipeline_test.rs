// End-to-end pipeline scenarios: blend → analyze → aggregate with mocked
// engines, mirroring how the scout drives the pipeline in production.

use std::sync::Arc;

use sentipulse_common::{SentimentLabel, SourceKind};
use sentipulse_engine::testing::{news_item, post_item, FixedLexicon, MockClassifier};
use sentipulse_engine::{
    aggregate_by_source, aggregate_global, scored_results, HybridBlender, ItemAnalyzer,
    ScoringConfig,
};

fn pipeline(lexicon: FixedLexicon, classifier: MockClassifier) -> ItemAnalyzer {
    ItemAnalyzer::new(Arc::new(HybridBlender::new(
        Arc::new(lexicon),
        Arc::new(classifier),
        ScoringConfig::default(),
    )))
}

#[tokio::test]
async fn opposing_news_items_aggregate_to_neutral() {
    let positive_text = "La economía crece fuertemente";
    let negative_text = "Crisis y desempleo aumentan";

    let lexicon = FixedLexicon::new()
        .on_text(positive_text, SentimentLabel::Positive, 0.6)
        .on_text(negative_text, SentimentLabel::Negative, -0.6);
    let classifier = MockClassifier::new()
        .on_text(&format!("{positive_text}. "), SentimentLabel::Positive, 0.9)
        .on_text(&format!("{negative_text}. "), SentimentLabel::Negative, 0.9);

    let items = vec![news_item(positive_text), news_item(negative_text)];
    let analyses = pipeline(lexicon, classifier).analyze(&items).await;
    let results = scored_results(&analyses);

    assert_eq!(results.len(), 2);
    let by_source = aggregate_by_source(&results);
    assert_eq!(by_source.len(), 1);
    assert_eq!(by_source[&SourceKind::News], 0.0);
    assert_eq!(aggregate_global(&results), 0.0);
}

#[tokio::test]
async fn mixed_sources_aggregate_separately_and_globally() {
    let lexicon = FixedLexicon::new();
    let classifier = MockClassifier::new()
        .on_text("optimistic headline. ", SentimentLabel::Positive, 0.8)
        .on_text("upbeat post. ", SentimentLabel::Positive, 0.7)
        .on_text("angry post. ", SentimentLabel::Negative, 0.9);

    let items = vec![
        news_item("optimistic headline"),
        post_item("upbeat post", 250),
        post_item("angry post", 3),
    ];
    let analyses = pipeline(lexicon, classifier).analyze(&items).await;
    let results = scored_results(&analyses);

    let by_source = aggregate_by_source(&results);
    assert_eq!(by_source[&SourceKind::News], 1.0);
    assert_eq!(by_source[&SourceKind::Twitter], 0.0);
    assert!((aggregate_global(&results) - 1.0 / 3.0).abs() < 1e-9);

    // Engagement rides along untouched.
    assert_eq!(results[1].engagement, 250);
    assert_eq!(results[2].engagement, 3);
}

#[tokio::test]
async fn partial_failures_still_aggregate_the_scored_remainder() {
    let lexicon = FixedLexicon::new();
    // Only one of two items is classifiable.
    let classifier =
        MockClassifier::new().on_text("good news. ", SentimentLabel::Positive, 0.9);

    let items = vec![news_item("good news"), news_item("unclassifiable")];
    let analyses = pipeline(lexicon, classifier).analyze(&items).await;

    assert_eq!(analyses.len(), 2);
    let results = scored_results(&analyses);
    assert_eq!(results.len(), 1);
    assert_eq!(aggregate_global(&results), 1.0);
    assert_eq!(aggregate_by_source(&results)[&SourceKind::News], 1.0);
}

#[tokio::test]
async fn every_confidence_lands_in_unit_range_with_three_decimals() {
    let lexicon = FixedLexicon::new()
        .on_text("a", SentimentLabel::Positive, 0.777)
        .on_text("b", SentimentLabel::Negative, -0.333);
    let classifier = MockClassifier::new()
        .on_text("a. ", SentimentLabel::Positive, 0.654321)
        .on_text("b. ", SentimentLabel::Neutral, 0.987654);

    let items = vec![news_item("a"), news_item("b")];
    let analyses = pipeline(lexicon, classifier).analyze(&items).await;

    for result in scored_results(&analyses) {
        assert!((0.0..=1.0).contains(&result.confidence));
        let scaled = result.confidence * 1000.0;
        assert!(
            (scaled - scaled.round()).abs() < 1e-9,
            "confidence {} has more than three decimals",
            result.confidence
        );
    }
}
