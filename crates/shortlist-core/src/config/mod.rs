//! Engine configuration.
//!
//! Defaults live in [`defaults`]; values can be overridden from TOML.

pub mod defaults;

use serde::{Deserialize, Serialize};

use crate::errors::ShortlistResult;

/// Shortlist engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortlistConfig {
    /// Number of enriched texts sent to the embedding provider per batch.
    pub embedding_batch_size: usize,
    /// Result count used when the caller does not specify `top_k`.
    pub default_top_k: usize,
}

impl Default for ShortlistConfig {
    fn default() -> Self {
        Self {
            embedding_batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
            default_top_k: defaults::DEFAULT_TOP_K,
        }
    }
}

impl ShortlistConfig {
    /// Parse a configuration from a TOML document. Missing keys fall back
    /// to defaults.
    pub fn from_toml_str(raw: &str) -> ShortlistResult<Self> {
        Ok(toml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = ShortlistConfig::default();
        assert_eq!(config.embedding_batch_size, 50);
        assert_eq!(config.default_top_k, 5);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ShortlistConfig::from_toml_str("default_top_k = 10").unwrap();
        assert_eq!(config.default_top_k, 10);
        assert_eq!(config.embedding_batch_size, 50);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let config = ShortlistConfig::from_toml_str("").unwrap();
        assert_eq!(config.default_top_k, 5);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(ShortlistConfig::from_toml_str("default_top_k = \"ten\"").is_err());
    }
}
