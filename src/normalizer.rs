//! Normalizer: raw lyric text → stemmed word-frequency bag

use crate::types::{FrequencyBag, Stemmer};

/// Build a stemmed frequency bag from one source's raw text.
///
/// Tokenizes on whitespace and stems every token before counting, so surface
/// variants collapse to one key. Text is expected to be case/punctuation
/// normalized upstream. Empty (or whitespace-only) text yields an empty bag;
/// callers must exclude empty bags from reconciliation entirely.
pub fn word_bag(text: &str, stemmer: &dyn Stemmer) -> FrequencyBag {
    let mut bag = FrequencyBag::new();
    for token in text.split_whitespace() {
        let stem = stemmer.stem(token);
        *bag.entry(stem).or_insert(0) += 1;
    }
    bag
}
