//! Configuration for the lyric analyzer
//!
//! TOML-backed settings with defaults, loaded as `serde` structs.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Analyzer settings, deserializable from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Snowball stemmer language (e.g., "english", "french")
    pub stemmer_language: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            stemmer_language: "english".to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;
        info!(path = %path.display(), language = %config.stemmer_language, "Loaded analyzer config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_english() {
        assert_eq!(AnalyzerConfig::default().stemmer_language, "english");
    }

    #[test]
    fn parses_toml_with_defaults_for_missing_keys() {
        let config: AnalyzerConfig = toml::from_str("").unwrap();
        assert_eq!(config.stemmer_language, "english");

        let config: AnalyzerConfig =
            toml::from_str("stemmer_language = \"french\"").unwrap();
        assert_eq!(config.stemmer_language, "french");
    }

    #[test]
    fn load_reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lyric-fusion.toml");
        std::fs::write(&path, "stemmer_language = \"german\"\n").unwrap();

        let config = AnalyzerConfig::load(&path).unwrap();
        assert_eq!(config.stemmer_language, "german");
    }

    #[test]
    fn load_reports_parse_failure_as_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "stemmer_language = [1, 2]\n").unwrap();

        match AnalyzerConfig::load(&path) {
            Err(Error::Config(msg)) => assert!(msg.contains("broken.toml")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }
}
