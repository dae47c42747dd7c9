//! Configuration module for the path resolver and trail renderer
//!
//! This module provides the resolver configuration, its builder methods and
//! loading from a YAML file.

use crate::models::Taxonomy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default maximum number of path segments before a URL is considered malformed
pub const DEFAULT_MAX_SEGMENTS: usize = 5;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Configuration for resolving and rendering breadcrumbs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// URLs with more segments than this produce no trail
    pub max_segments: usize,

    /// Literal path words that are namespace prefixes rather than term slugs
    pub structural_prefixes: Vec<String>,

    /// Label of the root entry
    pub home_label: String,

    /// CSS class on the JSON-LD `<script>` element
    pub schema_class: String,

    /// CSS class on the visible trail container
    pub container_class: String,

    /// Inline style on the visible trail container
    pub container_style: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_segments: DEFAULT_MAX_SEGMENTS,
            structural_prefixes: [Taxonomy::Category, Taxonomy::Tag]
                .iter()
                .map(|t| t.prefix_word().to_string())
                .collect(),
            home_label: "Home".to_string(),
            schema_class: "schema-breadcrumbs".to_string(),
            container_class: "breadcrumbs".to_string(),
            container_style: "font-size: 12px;".to_string(),
        }
    }
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a config from a YAML file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }

    /// Parse and validate a config from YAML text. Missing keys take defaults.
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not a mapping
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Set max segments (builder pattern)
    pub fn with_max_segments(mut self, max: usize) -> Self {
        self.max_segments = max;
        self
    }

    /// Set structural prefixes (builder pattern)
    pub fn with_structural_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.structural_prefixes = prefixes;
        self
    }

    /// Set home label (builder pattern)
    pub fn with_home_label(mut self, label: impl Into<String>) -> Self {
        self.home_label = label.into();
        self
    }

    /// Set container class and style (builder pattern)
    pub fn with_container(mut self, class: impl Into<String>, style: impl Into<String>) -> Self {
        self.container_class = class.into();
        self.container_style = style.into();
        self
    }

    /// Set JSON-LD script class (builder pattern)
    pub fn with_schema_class(mut self, class: impl Into<String>) -> Self {
        self.schema_class = class.into();
        self
    }

    /// Check the config for values the resolver cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_segments == 0 {
            return Err(ConfigError::InvalidConfig(
                "max_segments must be at least 1".to_string(),
            ));
        }

        for prefix in &self.structural_prefixes {
            if prefix.is_empty() || prefix.contains('/') {
                return Err(ConfigError::InvalidConfig(format!(
                    "structural prefix must be a single non-empty path word, got '{}'",
                    prefix
                )));
            }
        }

        if self.home_label.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "home_label must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Check if a segment is a structural prefix word
    pub fn is_structural_prefix(&self, segment: &str) -> bool {
        self.structural_prefixes.iter().any(|p| p == segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_builder() {
        let config = ResolverConfig::new()
            .with_max_segments(3)
            .with_home_label("Start")
            .with_structural_prefixes(vec!["topics".to_string()]);

        assert_eq!(config.max_segments, 3);
        assert_eq!(config.home_label, "Start");
        assert!(config.is_structural_prefix("topics"));
        assert!(!config.is_structural_prefix("category"));
    }

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.max_segments, DEFAULT_MAX_SEGMENTS);
        assert!(config.is_structural_prefix("category"));
        assert!(config.is_structural_prefix("tag"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ResolverConfig::from_yaml_str("max_segments: 7\n").unwrap();
        assert_eq!(config.max_segments, 7);
        assert_eq!(config.home_label, "Home");

        assert_eq!(ResolverConfig::from_yaml_str("").unwrap(), ResolverConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            ResolverConfig::from_yaml_str("max_segments: 0"),
            Err(ConfigError::InvalidConfig(_))
        ));
        assert!(matches!(
            ResolverConfig::from_yaml_str("structural_prefixes: ['a/b']"),
            Err(ConfigError::InvalidConfig(_))
        ));
        assert!(matches!(
            ResolverConfig::from_yaml_str("max_segments: [1"),
            Err(ConfigError::YamlError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "home_label: Startseite\ncontainer_class: crumbs").unwrap();

        let config = ResolverConfig::from_path(file.path()).unwrap();
        assert_eq!(config.home_label, "Startseite");
        assert_eq!(config.container_class, "crumbs");
        assert_eq!(config.max_segments, DEFAULT_MAX_SEGMENTS);
    }
}
