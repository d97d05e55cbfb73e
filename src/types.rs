//! Core types and capability traits for lyric fusion
//!
//! Defines the data model shared by the fusion pipeline:
//! - `FrequencyBag`: one source's stemmed word counts
//! - `WordClassification`: per-word agreement state after reconciliation
//! - `RecordStats`: one song's agreement statistics
//! - `UsageReport`: cross-song running averages
//!
//! The two NLP capabilities (stemming and part-of-speech tagging) are modeled
//! as injectable single-operation traits so the pipeline can be exercised with
//! deterministic fakes in tests. Production implementations live in
//! `crate::nlp`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque identifier of a contributing lyric source (e.g., "genius", "azlyrics")
pub type SourceLabel = String;

/// Stemmed word → positive occurrence count, attributed to one source
pub type FrequencyBag = HashMap<String, u32>;

/// Word stemming capability (surface form → stem)
///
/// Injected into the normalizer so surface variants collapse to one bag key.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

/// Part-of-speech tagging capability (word → Penn Treebank tag)
///
/// Applied to every word entering a record's shared vocabulary.
pub trait PosTagger: Send + Sync {
    fn tag(&self, word: &str) -> String;
}

/// A group of sources that reported the same count for a disputed word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountCluster {
    /// Sources that reported this count (sorted)
    pub sources: Vec<SourceLabel>,
    /// The count every source in this cluster reported
    pub count: u32,
}

/// Agreement state of one word across all contributing sources
///
/// Exactly one variant is active per word once reconciliation completes.
/// During construction a word only ever moves Unique→Agreed, Unique→Disputed,
/// or Agreed→Disputed; Disputed is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WordClassification {
    /// Reported by exactly one source
    Unique { source: SourceLabel, count: u32 },
    /// Every reporting source (≥2) gave the same count
    Agreed { sources: Vec<SourceLabel>, count: u32 },
    /// ≥2 sources with differing counts, grouped into clusters by count value
    Disputed { clusters: Vec<CountCluster> },
}

/// One entry of a record's consensus vocabulary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedWord {
    pub word: String,
    /// Corroborated count (the agreed count, or the disputed floor)
    pub count: u32,
    /// Penn Treebank part-of-speech tag
    pub pos_tag: String,
}

/// Agreement statistics for one song's reconciled lyrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordStats {
    /// Fraction of counted token mass corroborated by more than one source (0.0-1.0)
    pub agreement_ratio: f64,
    /// Number of distinct words in the shared vocabulary
    pub vocabulary_size: usize,
    /// Sum of shared vocabulary counts (agreed mass plus disputed floors)
    pub total_token_count: u64,
    /// vocabulary_size / total_token_count; inverse measure of repetitiveness
    pub repetition_coefficient: f64,
    /// Number of sources that contributed a non-empty bag
    pub contributing_source_count: usize,
    /// Consensus vocabulary, sorted by word
    pub shared_vocabulary: Vec<SharedWord>,
}

/// Cross-record running averages, read from [`crate::aggregator::UsageAggregator`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageReport {
    pub record_count: u64,
    pub average_agreement_ratio: f64,
    pub average_vocabulary_size: f64,
    pub average_total_token_count: f64,
    pub average_repetition_coefficient: f64,
    pub average_elapsed_time_ms: f64,
}
