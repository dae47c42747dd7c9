//! In-memory term catalog
//!
//! A [`TermLookup`] backed by two slug maps, loadable from YAML or JSON:
//!
//! ```yaml
//! categories:
//!   - slug: electronics
//!     name: Electronics
//!     id: 5
//!     url: https://site.test/electronics
//! tags:
//!   - slug: sale
//!     name: Sale
//!     id: 12
//!     url: https://site.test/tag/sale
//! ```

use crate::context::{LookupError, TermLookup};
use crate::models::{Taxonomy, TermRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Catalog loading errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Duplicate {taxonomy} slug: {slug}")]
    DuplicateSlug { taxonomy: Taxonomy, slug: String },

    #[error("Unsupported catalog file extension: {0}")]
    UnsupportedFormat(String),
}

/// One term as written in a catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermSpec {
    pub slug: String,
    pub name: String,
    pub id: i64,
    pub url: String,
}

/// On-disk catalog layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    pub categories: Vec<TermSpec>,
    pub tags: Vec<TermSpec>,
}

/// Term lookup over in-memory slug maps
#[derive(Debug, Clone, Default)]
pub struct TermCatalog {
    categories: HashMap<String, TermRecord>,
    tags: HashMap<String, TermRecord>,
}

impl TermCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog, picking the parser from the file extension
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();

        match ext.as_str() {
            "json" => Self::from_json_str(&raw),
            "yaml" | "yml" => Self::from_yaml_str(&raw),
            other => Err(CatalogError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, CatalogError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let file: CatalogFile = serde_yaml::from_str(raw)?;
        Self::from_file(file)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::from_file(file)
    }

    /// Build a catalog from parsed file contents, rejecting duplicate slugs
    pub fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for spec in file.categories {
            catalog.insert(Taxonomy::Category, spec)?;
        }
        for spec in file.tags {
            catalog.insert(Taxonomy::Tag, spec)?;
        }
        Ok(catalog)
    }

    /// Add a term to a namespace
    pub fn insert(&mut self, taxonomy: Taxonomy, spec: TermSpec) -> Result<(), CatalogError> {
        let map = self.namespace_mut(taxonomy);
        if map.contains_key(&spec.slug) {
            return Err(CatalogError::DuplicateSlug {
                taxonomy,
                slug: spec.slug,
            });
        }
        map.insert(spec.slug, TermRecord::new(spec.name, spec.id, spec.url));
        Ok(())
    }

    /// Add a term (builder pattern). A repeated slug replaces the earlier term.
    pub fn with_term(
        mut self,
        taxonomy: Taxonomy,
        slug: impl Into<String>,
        record: TermRecord,
    ) -> Self {
        self.namespace_mut(taxonomy).insert(slug.into(), record);
        self
    }

    /// Number of terms in a namespace
    pub fn count(&self, taxonomy: Taxonomy) -> usize {
        self.namespace(taxonomy).len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.tags.is_empty()
    }

    fn namespace(&self, taxonomy: Taxonomy) -> &HashMap<String, TermRecord> {
        match taxonomy {
            Taxonomy::Category => &self.categories,
            Taxonomy::Tag => &self.tags,
        }
    }

    fn namespace_mut(&mut self, taxonomy: Taxonomy) -> &mut HashMap<String, TermRecord> {
        match taxonomy {
            Taxonomy::Category => &mut self.categories,
            Taxonomy::Tag => &mut self.tags,
        }
    }
}

impl TermLookup for TermCatalog {
    fn find_by_slug(&self, slug: &str, taxonomy: Taxonomy) -> Result<Option<TermRecord>, LookupError> {
        Ok(self.namespace(taxonomy).get(slug).cloned())
    }
}
