//! Default NLP capability implementations
//!
//! Production stand-ins for the injected [`crate::types::Stemmer`] and
//! [`crate::types::PosTagger`] capabilities. Tests of the fusion pipeline use
//! deterministic fakes instead.

pub mod stemmer;
pub mod tagger;

pub use stemmer::SnowballStemmer;
pub use tagger::SuffixPosTagger;
