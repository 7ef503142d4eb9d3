//! Parser configuration
//!
//! Defaults suit embedded use; the CLI loads overrides from a TOML
//! file:
//!
//! ```toml
//! max_depth = 50
//! keep_foreign_comments = false
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default ceiling on block nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunable parsing behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Ceiling on nesting depth (root = 0); exceeding it aborts the
    /// parse regardless of any other validity
    pub max_depth: usize,
    /// Pass non-directive comment markers through as literal text
    /// instead of dropping them
    pub keep_foreign_comments: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            keep_foreign_comments: true,
        }
    }
}

impl ParseConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nesting depth ceiling
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set whether foreign comments are kept as literal text
    pub fn with_keep_foreign_comments(mut self, keep: bool) -> Self {
        self.keep_foreign_comments = keep;
        self
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParseConfig::default();
        assert_eq!(config.max_depth, 100);
        assert!(config.keep_foreign_comments);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ParseConfig::from_toml_str("max_depth = 5").unwrap();
        assert_eq!(config.max_depth, 5);
        assert!(config.keep_foreign_comments);
    }

    #[test]
    fn test_full_toml() {
        let config =
            ParseConfig::from_toml_str("max_depth = 7\nkeep_foreign_comments = false").unwrap();
        assert_eq!(config.max_depth, 7);
        assert!(!config.keep_foreign_comments);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let result = ParseConfig::from_toml_str("max_depth = \"deep\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_builder_style_overrides() {
        let config = ParseConfig::new()
            .with_max_depth(3)
            .with_keep_foreign_comments(false);
        assert_eq!(config.max_depth, 3);
        assert!(!config.keep_foreign_comments);
    }
}
