//! Snowball stemmer adapter over the `rust-stemmers` crate

use crate::error::{Error, Result};
use crate::types::Stemmer;
use rust_stemmers::Algorithm;

/// Snowball stemmer for a fixed language (English Porter2 by default).
pub struct SnowballStemmer {
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    pub fn english() -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }

    /// Create a stemmer for a named language.
    ///
    /// Returns a configuration error for unsupported languages.
    pub fn for_language(language: &str) -> Result<Self> {
        let algorithm = match language {
            "english" | "en" => Algorithm::English,
            "french" | "fr" => Algorithm::French,
            "german" | "de" => Algorithm::German,
            "spanish" | "es" => Algorithm::Spanish,
            "italian" | "it" => Algorithm::Italian,
            "portuguese" | "pt" => Algorithm::Portuguese,
            "dutch" | "nl" => Algorithm::Dutch,
            "swedish" | "sv" => Algorithm::Swedish,
            "russian" | "ru" => Algorithm::Russian,
            other => {
                return Err(Error::Config(format!(
                    "unsupported stemmer language: {other}"
                )))
            }
        };
        Ok(Self {
            inner: rust_stemmers::Stemmer::create(algorithm),
        })
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_english_surface_variants() {
        let stemmer = SnowballStemmer::english();
        assert_eq!(stemmer.stem("running"), stemmer.stem("runs"));
        assert_eq!(stemmer.stem("dogs"), "dog");
    }

    #[test]
    fn rejects_unknown_language() {
        assert!(matches!(
            SnowballStemmer::for_language("klingon"),
            Err(Error::Config(_))
        ));
    }
}
