use std::collections::HashMap;

use sentipulse_common::{SentimentResult, SourceKind};

/// Mean signed score per source. Sources with no contributing results are
/// absent from the map, never present as a zero placeholder.
pub fn aggregate_by_source(results: &[SentimentResult]) -> HashMap<SourceKind, f64> {
    let mut groups: HashMap<SourceKind, (f64, u32)> = HashMap::new();
    for result in results {
        let entry = groups.entry(result.source).or_insert((0.0, 0));
        entry.0 += result.sentiment.signed_score();
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(source, (sum, count))| (source, sum / count as f64))
        .collect()
}

/// Mean signed score over all results regardless of source.
/// An empty result set aggregates to 0.0 (neutral), never an error.
pub fn aggregate_global(results: &[SentimentResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let sum: f64 = results.iter().map(|r| r.sentiment.signed_score()).sum();
    sum / results.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentipulse_common::{BlendedSentiment, SentimentLabel};

    fn result(source: SourceKind, label: SentimentLabel) -> SentimentResult {
        BlendedSentiment {
            sentiment: label,
            confidence: 0.8,
            lexicon_label: label,
            contextual_label: label,
        }
        .tagged(source, 1)
    }

    #[test]
    fn empty_input_aggregates_neutral() {
        assert_eq!(aggregate_global(&[]), 0.0);
        assert!(aggregate_by_source(&[]).is_empty());
    }

    #[test]
    fn opposing_news_results_cancel_out() {
        let results = vec![
            result(SourceKind::News, SentimentLabel::Positive),
            result(SourceKind::News, SentimentLabel::Negative),
        ];
        let by_source = aggregate_by_source(&results);
        assert_eq!(by_source.len(), 1);
        assert_eq!(by_source[&SourceKind::News], 0.0);
        assert_eq!(aggregate_global(&results), 0.0);
    }

    #[test]
    fn sources_are_averaged_independently() {
        let results = vec![
            result(SourceKind::News, SentimentLabel::Positive),
            result(SourceKind::News, SentimentLabel::Positive),
            result(SourceKind::News, SentimentLabel::Neutral),
            result(SourceKind::Twitter, SentimentLabel::Negative),
        ];
        let by_source = aggregate_by_source(&results);
        assert!((by_source[&SourceKind::News] - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(by_source[&SourceKind::Twitter], -1.0);
        assert!((aggregate_global(&results) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn absent_sources_get_no_entry() {
        let results = vec![result(SourceKind::News, SentimentLabel::Positive)];
        let by_source = aggregate_by_source(&results);
        assert!(!by_source.contains_key(&SourceKind::Twitter));
        assert!(!by_source.contains_key(&SourceKind::Reddit));
    }

    #[test]
    fn aggregate_stays_in_unit_range() {
        let results: Vec<_> = (0..10)
            .map(|_| result(SourceKind::News, SentimentLabel::Positive))
            .collect();
        assert_eq!(aggregate_global(&results), 1.0);
        let results: Vec<_> = (0..10)
            .map(|_| result(SourceKind::News, SentimentLabel::Negative))
            .collect();
        assert_eq!(aggregate_global(&results), -1.0);
    }

    #[test]
    fn engagement_does_not_weight_aggregation() {
        let heavy = BlendedSentiment {
            sentiment: SentimentLabel::Positive,
            confidence: 0.9,
            lexicon_label: SentimentLabel::Positive,
            contextual_label: SentimentLabel::Positive,
        }
        .tagged(SourceKind::Twitter, 10_000);
        let light = BlendedSentiment {
            sentiment: SentimentLabel::Negative,
            confidence: 0.9,
            lexicon_label: SentimentLabel::Negative,
            contextual_label: SentimentLabel::Negative,
        }
        .tagged(SourceKind::Twitter, 1);
        assert_eq!(aggregate_global(&[heavy, light]), 0.0);
    }
}
