//! Lyric analyzer: per-song pipeline facade
//!
//! Wires normalize → reconcile → metrics → aggregate for one song's set of
//! source texts, timing the pass and feeding the shared usage aggregator.
//! Reconciliation and metric computation are pure per-call functions, so
//! analyzers may process different songs concurrently; only the aggregator
//! is shared.

use crate::aggregator::UsageAggregator;
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::metrics::record_stats;
use crate::nlp::{SnowballStemmer, SuffixPosTagger};
use crate::normalizer::word_bag;
use crate::reconciler::reconcile;
use crate::types::{PosTagger, RecordStats, SourceLabel, Stemmer, UsageReport};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Reconciles multiple transcriptions of one song into consensus statistics.
pub struct LyricAnalyzer {
    stemmer: Box<dyn Stemmer>,
    tagger: Box<dyn PosTagger>,
    usage: Arc<UsageAggregator>,
}

impl LyricAnalyzer {
    /// Create an analyzer with injected capabilities and a fresh aggregator.
    pub fn new(stemmer: Box<dyn Stemmer>, tagger: Box<dyn PosTagger>) -> Self {
        Self {
            stemmer,
            tagger,
            usage: Arc::new(UsageAggregator::new()),
        }
    }

    /// Create an analyzer with the default NLP capabilities from config.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        let stemmer = SnowballStemmer::for_language(&config.stemmer_language)?;
        Ok(Self::new(Box::new(stemmer), Box::new(SuffixPosTagger::new())))
    }

    /// Analyze one song's transcriptions and record the result.
    ///
    /// Sources with empty text cast no vote and are excluded entirely.
    /// Returns `None` when the record yields no metrics (all texts empty, or
    /// a lone source with an empty vocabulary); such records are not
    /// aggregated.
    pub fn analyze(&self, sources: &[(SourceLabel, String)]) -> Option<RecordStats> {
        let start = Instant::now();

        let bags: Vec<_> = sources
            .iter()
            .filter_map(|(label, text)| {
                let bag = word_bag(text, self.stemmer.as_ref());
                if bag.is_empty() {
                    debug!(source = %label, "Dropping source with empty text");
                    None
                } else {
                    Some((label.clone(), bag))
                }
            })
            .collect();

        let classification = reconcile(&bags);
        let stats = record_stats(&classification, bags.len(), self.tagger.as_ref())?;

        self.usage.record(&stats, start.elapsed());
        Some(stats)
    }

    /// Snapshot the running usage averages (`None` before any record).
    pub fn usage_report(&self) -> Option<UsageReport> {
        self.usage.report()
    }

    /// Zero the usage accumulators.
    pub fn reset_usage(&self) {
        self.usage.reset();
    }

    /// Handle to the shared aggregator, for callers recording from elsewhere.
    pub fn aggregator(&self) -> Arc<UsageAggregator> {
        Arc::clone(&self.usage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct IdentityStemmer;
    impl Stemmer for IdentityStemmer {
        fn stem(&self, word: &str) -> String {
            word.to_string()
        }
    }

    struct FixedTagger;
    impl PosTagger for FixedTagger {
        fn tag(&self, _word: &str) -> String {
            "NN".to_string()
        }
    }

    fn analyzer() -> LyricAnalyzer {
        LyricAnalyzer::new(Box::new(IdentityStemmer), Box::new(FixedTagger))
    }

    fn sources(pairs: &[(&str, &str)]) -> Vec<(SourceLabel, String)> {
        pairs
            .iter()
            .map(|(l, t)| (l.to_string(), t.to_string()))
            .collect()
    }

    #[test]
    fn all_empty_texts_yield_no_metrics_and_no_aggregation() {
        let analyzer = analyzer();
        let result = analyzer.analyze(&sources(&[("a", ""), ("b", "   ")]));
        assert_eq!(result, None);
        assert_eq!(analyzer.usage_report(), None);
    }

    #[test]
    fn empty_sources_cast_no_vote() {
        let analyzer = analyzer();
        // "b" contributes nothing: the record behaves as single-source.
        let stats = analyzer
            .analyze(&sources(&[("a", "run run walk"), ("b", "")]))
            .unwrap();
        assert_eq!(stats.contributing_source_count, 1);
        assert_eq!(stats.agreement_ratio, 1.0);
        assert_eq!(stats.vocabulary_size, 2);
        assert_eq!(stats.total_token_count, 3);
    }

    #[test]
    fn analyzed_records_feed_the_usage_report() {
        let analyzer = analyzer();
        analyzer
            .analyze(&sources(&[("a", "run run"), ("b", "run run")]))
            .unwrap();
        analyzer
            .analyze(&sources(&[("a", "walk"), ("b", "home")]))
            .unwrap();

        let report = analyzer.usage_report().unwrap();
        assert_eq!(report.record_count, 2);
        assert_eq!(report.average_agreement_ratio, 0.5);

        analyzer.reset_usage();
        assert_eq!(analyzer.usage_report(), None);
    }

    #[test]
    fn record_stats_are_order_independent() {
        let analyzer = analyzer();
        let forward = sources(&[
            ("a", "run run run walk"),
            ("b", "run run run home home"),
            ("c", "run walk home home"),
        ]);
        let mut rotated = forward.clone();
        rotated.rotate_left(2);

        assert_eq!(
            analyzer.analyze(&forward).unwrap(),
            analyzer.analyze(&rotated).unwrap()
        );
    }
}
