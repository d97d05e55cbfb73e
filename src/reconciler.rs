//! Reconciler: merges per-source frequency bags into per-word classifications
//!
//! Takes N bags for one song and classifies every distinct word:
//! - `Unique` — reported by exactly one source
//! - `Agreed` — every reporting source gave the same count
//! - `Disputed` — differing counts, grouped into clusters by count value
//!
//! # Determinism
//! Observations are grouped by count value per word rather than merged
//! sequentially, so reordering the input sources never changes the resulting
//! classification. Cluster lists are ordered ascending by count and source
//! lists are sorted, so equal inputs compare equal.
//!
//! # Example
//! Three sources reporting "home": counts 4, 4, 2
//! - cluster {count: 2, sources: [c]}
//! - cluster {count: 4, sources: [a, b]}
//! → `Disputed` with two clusters.

use crate::types::{CountCluster, FrequencyBag, SourceLabel, WordClassification};
use std::collections::BTreeMap;
use tracing::debug;

/// Reconcile per-source frequency bags into a per-word classification map.
///
/// Input must already be filtered to drop empty bags: a source that produced
/// nothing casts no vote and is attributed no words. Supports 1..N sources.
/// Pure function; each call builds its own classification from scratch.
pub fn reconcile(
    bags: &[(SourceLabel, FrequencyBag)],
) -> BTreeMap<String, WordClassification> {
    // word → (count → sources reporting that count)
    let mut observations: BTreeMap<&str, BTreeMap<u32, Vec<&str>>> = BTreeMap::new();
    for (label, bag) in bags {
        debug_assert!(!bag.is_empty(), "empty bag passed to reconcile: {label}");
        for (word, &count) in bag {
            debug_assert!(count > 0, "non-positive count for word {word:?} from {label}");
            observations
                .entry(word.as_str())
                .or_default()
                .entry(count)
                .or_default()
                .push(label.as_str());
        }
    }

    let mut classified = BTreeMap::new();
    for (word, by_count) in observations {
        classified.insert(word.to_string(), classify(by_count));
    }

    debug!(
        source_count = bags.len(),
        word_count = classified.len(),
        "Reconciled frequency bags"
    );

    classified
}

/// Classify one word from its count-grouped observations.
fn classify(by_count: BTreeMap<u32, Vec<&str>>) -> WordClassification {
    let source_total: usize = by_count.values().map(Vec::len).sum();

    if source_total == 1 {
        let (count, sources) = by_count.into_iter().next().unwrap();
        return WordClassification::Unique {
            source: sources[0].to_string(),
            count,
        };
    }

    if by_count.len() == 1 {
        let (count, sources) = by_count.into_iter().next().unwrap();
        return WordClassification::Agreed {
            sources: sorted_labels(sources),
            count,
        };
    }

    let clusters = by_count
        .into_iter()
        .map(|(count, sources)| CountCluster {
            sources: sorted_labels(sources),
            count,
        })
        .collect();
    WordClassification::Disputed { clusters }
}

fn sorted_labels(mut sources: Vec<&str>) -> Vec<SourceLabel> {
    sources.sort_unstable();
    sources.into_iter().map(str::to_string).collect()
}
