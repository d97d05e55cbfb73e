//! lyric-fusion - Multi-source lyric reconciliation
//!
//! Reconciles independent transcriptions of the same song into a consensus
//! word-frequency profile plus metrics describing how much the sources agree,
//! letting a caller score data quality before persisting an augmented record.
//!
//! Pipeline: raw texts → [`normalizer`] (×N) → [`reconciler`] → [`metrics`] →
//! [`aggregator`]. [`analyzer::LyricAnalyzer`] wires the stages together per
//! song. Retrieval of source texts and persistence of results are external
//! collaborators; the crate owns no file format, network protocol, or schema.

pub mod aggregator;
pub mod analyzer;
pub mod config;
pub mod error;
pub mod metrics;
pub mod nlp;
pub mod normalizer;
pub mod reconciler;
pub mod types;

pub use crate::aggregator::UsageAggregator;
pub use crate::analyzer::LyricAnalyzer;
pub use crate::config::AnalyzerConfig;
pub use crate::error::{Error, Result};
pub use crate::types::{
    CountCluster, FrequencyBag, PosTagger, RecordStats, SharedWord, SourceLabel, Stemmer,
    UsageReport, WordClassification,
};
