//! Data models for URL breadcrumbs
//!
//! This module defines the core data structures used throughout the crate:
//! the two term namespaces, lookup results, breadcrumb entries and the
//! validated trail built from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two flat term namespaces a URL segment can resolve into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Taxonomy {
    Category,
    Tag,
}

impl Taxonomy {
    /// Get the literal path word hosts use as a prefix for this namespace
    pub fn prefix_word(&self) -> &'static str {
        match self {
            Taxonomy::Category => "category",
            Taxonomy::Tag => "tag",
        }
    }
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix_word())
    }
}

/// A resolved taxonomy term, as returned by a term lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRecord {
    /// Display name of the term (unescaped)
    pub name: String,

    /// Unique term identifier, shared across both namespaces
    pub id: i64,

    /// Canonical absolute URL of the term's listing page
    pub url: String,
}

impl TermRecord {
    pub fn new(name: impl Into<String>, id: i64, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id,
            url: url.into(),
        }
    }
}

/// Kind of a breadcrumb entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Site root ("Home")
    Base,
    Category,
    Tag,
    /// The single item being viewed (e.g. an article)
    Leaf,
}

impl EntryKind {
    /// Get human-readable label for the entry kind
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Base => "base",
            EntryKind::Category => "category",
            EntryKind::Tag => "tag",
            EntryKind::Leaf => "leaf",
        }
    }

    /// Check if this entry came from a taxonomy term
    pub fn is_term(&self) -> bool {
        matches!(self, EntryKind::Category | EntryKind::Tag)
    }
}

impl From<Taxonomy> for EntryKind {
    fn from(taxonomy: Taxonomy) -> Self {
        match taxonomy {
            Taxonomy::Category => EntryKind::Category,
            Taxonomy::Tag => EntryKind::Tag,
        }
    }
}

/// One node in a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbEntry {
    /// Kind of the entry
    pub kind: EntryKind,

    /// Display label, already HTML-escaped
    pub label: String,

    /// Canonical absolute URL of this entry's own page
    pub url: String,

    /// Whether this entry is the page currently being viewed
    pub active: bool,
}

impl BreadcrumbEntry {
    /// Create the root entry. The base is never active.
    pub fn base(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Base,
            label: label.into(),
            url: url.into(),
            active: false,
        }
    }

    /// Create an entry for a resolved term
    pub fn term(
        taxonomy: Taxonomy,
        label: impl Into<String>,
        url: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            kind: taxonomy.into(),
            label: label.into(),
            url: url.into(),
            active,
        }
    }

    /// Create the terminal entry for a single-item page. The leaf is always active.
    pub fn leaf(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Leaf,
            label: label.into(),
            url: url.into(),
            active: true,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.kind == EntryKind::Leaf
    }
}

/// An ordered, validated breadcrumb trail
///
/// A trail always starts with an inactive base entry, holds at least two
/// entries, and carries at most one leaf which is then the last entry. It is
/// read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BreadcrumbTrail {
    entries: Vec<BreadcrumbEntry>,
}

impl BreadcrumbTrail {
    /// Build a trail from entries, returning `None` if any trail invariant is violated
    pub fn from_entries(entries: Vec<BreadcrumbEntry>) -> Option<Self> {
        if entries.len() < 2 {
            return None;
        }

        let base = &entries[0];
        if base.kind != EntryKind::Base || base.active {
            return None;
        }
        if entries[1..].iter().any(|e| e.kind == EntryKind::Base) {
            return None;
        }

        let leaves = entries.iter().filter(|e| e.is_leaf()).count();
        let last_is_leaf = entries.last().is_some_and(|e| e.is_leaf());
        if leaves > 1 || (leaves == 1 && !last_is_leaf) {
            return None;
        }

        Some(Self { entries })
    }

    /// All entries, base first
    pub fn entries(&self) -> &[BreadcrumbEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a trail holds at least two entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BreadcrumbEntry> {
        self.entries.iter()
    }

    /// Get the root entry
    pub fn base(&self) -> &BreadcrumbEntry {
        &self.entries[0]
    }

    /// Get the leaf entry, if the trail was built for a single-item page
    pub fn leaf(&self) -> Option<&BreadcrumbEntry> {
        self.entries.last().filter(|e| e.is_leaf())
    }

    /// Get the entries marked active
    pub fn active_entries(&self) -> impl Iterator<Item = &BreadcrumbEntry> {
        self.entries.iter().filter(|e| e.active)
    }

    /// Get the formatted path string (labels joined by ` > `)
    pub fn path(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.label.as_str())
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

impl<'a> IntoIterator for &'a BreadcrumbTrail {
    type Item = &'a BreadcrumbEntry;
    type IntoIter = std::slice::Iter<'a, BreadcrumbEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Metadata about a resolve operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// ISO timestamp of the resolve
    pub timestamp: String,

    /// Tool version
    pub tool_version: String,
}

impl ReportMetadata {
    /// Metadata stamped with the current time
    pub fn now() -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Complete result of resolving and rendering one request
#[derive(Debug, Clone, Serialize)]
pub struct TrailReport {
    /// Absolute request URL
    pub request_url: String,

    /// Site base URL
    pub base_url: String,

    /// The resolved trail, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail: Option<BreadcrumbTrail>,

    /// Why no trail was produced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Rendered JSON-LD block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<String>,

    /// Rendered visible trail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_trail: Option<String>,

    /// Report metadata
    pub metadata: ReportMetadata,
}

impl TrailReport {
    pub fn has_trail(&self) -> bool {
        self.trail.is_some()
    }
}
