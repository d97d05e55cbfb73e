//! Suffix-rule part-of-speech tagger
//!
//! A small deterministic tagger emitting Penn Treebank tags. Closed-class
//! words are matched exactly; everything else falls through a handful of
//! suffix rules, defaulting to `NN`. Shared-vocabulary entries are single
//! stemmed words with no sentence context, so the tags are necessarily coarse.

use crate::types::PosTagger;

/// Deterministic suffix-based Penn Treebank tagger.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixPosTagger;

impl SuffixPosTagger {
    pub fn new() -> Self {
        Self
    }
}

impl PosTagger for SuffixPosTagger {
    fn tag(&self, word: &str) -> String {
        tag_word(word).to_string()
    }
}

fn tag_word(word: &str) -> &'static str {
    if !word.is_empty() && word.chars().all(|c| c.is_ascii_digit()) {
        return "CD";
    }

    match word {
        "the" | "a" | "an" => "DT",
        "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "her" | "us"
        | "them" => "PRP",
        "my" | "your" | "his" | "its" | "our" | "their" => "PRP$",
        "and" | "or" | "but" | "nor" => "CC",
        "in" | "on" | "at" | "of" | "to" | "with" | "from" | "for" | "by" => "IN",
        "is" | "are" | "was" | "were" | "be" | "am" | "been" => "VBZ",
        "not" | "never" | "always" => "RB",
        _ => tag_by_suffix(word),
    }
}

fn tag_by_suffix(word: &str) -> &'static str {
    if word.len() > 4 && word.ends_with("ing") {
        "VBG"
    } else if word.len() > 3 && word.ends_with("ed") {
        "VBD"
    } else if word.len() > 3 && word.ends_with("ly") {
        "RB"
    } else if word.len() > 3 && word.ends_with("est") {
        "JJS"
    } else if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") {
        "NNS"
    } else {
        "NN"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_closed_class_words() {
        let tagger = SuffixPosTagger::new();
        assert_eq!(tagger.tag("the"), "DT");
        assert_eq!(tagger.tag("they"), "PRP");
        assert_eq!(tagger.tag("and"), "CC");
        assert_eq!(tagger.tag("with"), "IN");
    }

    #[test]
    fn tags_by_suffix() {
        let tagger = SuffixPosTagger::new();
        assert_eq!(tagger.tag("running"), "VBG");
        assert_eq!(tagger.tag("walked"), "VBD");
        assert_eq!(tagger.tag("quickly"), "RB");
        assert_eq!(tagger.tag("dogs"), "NNS");
        assert_eq!(tagger.tag("glass"), "NN");
    }

    #[test]
    fn tags_numbers_and_defaults_to_noun() {
        let tagger = SuffixPosTagger::new();
        assert_eq!(tagger.tag("42"), "CD");
        assert_eq!(tagger.tag("home"), "NN");
    }
}
