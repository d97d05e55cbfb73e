//! Metric computer: per-word classifications → one record's agreement statistics
//!
//! A word enters the consensus vocabulary only to the extent corroborated by
//! more than one source:
//! - `Agreed` words contribute their full count to agreed mass.
//! - `Disputed` words contribute the minimum cluster count (the floor every
//!   side of the dispute at least supports) to agreed mass, and the excess
//!   over that floor to disputed mass. The floor is the true minimum over
//!   count-grouped clusters, so it does not depend on input order.
//! - `Unique` words contribute their entire count to disputed mass and are
//!   excluded from the shared vocabulary.
//!
//! `agreement_ratio = agreed_mass / (agreed_mass + disputed_mass)`, with every
//! ratio defined as 0 on a zero denominator rather than failing.

use crate::types::{PosTagger, RecordStats, SharedWord, WordClassification};
use std::collections::BTreeMap;
use tracing::debug;

/// Derive one record's agreement statistics from its word classifications.
///
/// `source_count` is the number of sources that contributed a non-empty bag.
/// Returns `None` when the record yields no metrics: no contributing sources,
/// or a single source with an empty vocabulary. With two or more sources a
/// record always yields stats, even when nothing overlaps (ratio 0).
pub fn record_stats(
    classification: &BTreeMap<String, WordClassification>,
    source_count: usize,
    tagger: &dyn PosTagger,
) -> Option<RecordStats> {
    match source_count {
        0 => None,
        1 => single_source_stats(classification, tagger),
        _ => Some(multi_source_stats(classification, source_count, tagger)),
    }
}

/// Single-source path: every word is trivially agreed by the sole source.
fn single_source_stats(
    classification: &BTreeMap<String, WordClassification>,
    tagger: &dyn PosTagger,
) -> Option<RecordStats> {
    if classification.is_empty() {
        return None;
    }

    let shared_vocabulary: Vec<SharedWord> = classification
        .iter()
        .map(|(word, class)| {
            let count = match class {
                WordClassification::Unique { count, .. } => *count,
                // Unreachable with one source; counted at face value anyway.
                WordClassification::Agreed { count, .. } => *count,
                WordClassification::Disputed { clusters } => {
                    clusters.iter().map(|c| c.count).min().unwrap_or(0)
                }
            };
            tagged(word, count, tagger)
        })
        .collect();

    Some(finish(1.0, shared_vocabulary, 1))
}

fn multi_source_stats(
    classification: &BTreeMap<String, WordClassification>,
    source_count: usize,
    tagger: &dyn PosTagger,
) -> RecordStats {
    let mut agreed_mass: u64 = 0;
    let mut disputed_mass: u64 = 0;
    let mut shared_vocabulary = Vec::new();

    for (word, class) in classification {
        match class {
            WordClassification::Agreed { count, .. } => {
                agreed_mass += u64::from(*count);
                shared_vocabulary.push(tagged(word, *count, tagger));
            }
            WordClassification::Disputed { clusters } => {
                let floor = clusters.iter().map(|c| c.count).min().unwrap_or(0);
                agreed_mass += u64::from(floor);
                disputed_mass += clusters
                    .iter()
                    .map(|c| u64::from(c.count - floor))
                    .sum::<u64>();
                shared_vocabulary.push(tagged(word, floor, tagger));
            }
            WordClassification::Unique { count, .. } => {
                disputed_mass += u64::from(*count);
            }
        }
    }

    let counted = agreed_mass + disputed_mass;
    let agreement_ratio = if counted == 0 {
        0.0
    } else {
        agreed_mass as f64 / counted as f64
    };

    debug!(
        source_count,
        agreed_mass, disputed_mass, agreement_ratio, "Computed record statistics"
    );

    finish(agreement_ratio, shared_vocabulary, source_count)
}

fn tagged(word: &str, count: u32, tagger: &dyn PosTagger) -> SharedWord {
    SharedWord {
        word: word.to_string(),
        count,
        pos_tag: tagger.tag(word),
    }
}

fn finish(
    agreement_ratio: f64,
    shared_vocabulary: Vec<SharedWord>,
    contributing_source_count: usize,
) -> RecordStats {
    let vocabulary_size = shared_vocabulary.len();
    let total_token_count: u64 = shared_vocabulary.iter().map(|w| u64::from(w.count)).sum();
    let repetition_coefficient = if total_token_count == 0 {
        0.0
    } else {
        vocabulary_size as f64 / total_token_count as f64
    };

    RecordStats {
        agreement_ratio,
        vocabulary_size,
        total_token_count,
        repetition_coefficient,
        contributing_source_count,
        shared_vocabulary,
    }
}
