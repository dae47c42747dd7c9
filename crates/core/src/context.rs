//! Collaborator capabilities supplied by the hosting application
//!
//! The resolver never classifies pages or stores terms itself. It asks a
//! [`PageContext`] about the current page and a [`TermLookup`] about slugs.

use crate::models::{Taxonomy, TermRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Term lookup errors
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Term store unavailable: {0}")]
    Unavailable(String),

    #[error("Lookup failed for {taxonomy} slug '{slug}': {message}")]
    Failed {
        taxonomy: Taxonomy,
        slug: String,
        message: String,
    },
}

/// Answers questions about the page currently being served
pub trait PageContext {
    /// Whether the page is a tag listing
    fn is_tag_listing(&self) -> bool;

    /// Whether the page shows a single item (e.g. an article)
    fn is_single_item(&self) -> bool;

    /// Title of the item being viewed; only meaningful on single-item pages
    fn current_item_title(&self) -> Option<String>;

    /// Id of the term (or item) the page is about, if any
    fn active_term_id(&self) -> Option<i64>;

    /// Whether breadcrumbs should be produced for this page at all
    fn is_eligible(&self) -> bool {
        true
    }
}

/// Resolves slugs against the two term namespaces
pub trait TermLookup {
    /// Find a term by slug. `Ok(None)` means no such term.
    fn find_by_slug(&self, slug: &str, taxonomy: Taxonomy) -> Result<Option<TermRecord>, LookupError>;
}

/// Kind of page being served, as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    CategoryListing,
    TagListing,
    SingleItem,
    /// A standalone page the host has opted into breadcrumbs
    Page,
    #[default]
    Other,
}

/// A fixed page context, for hosts that know everything up front
#[derive(Debug, Clone, Default)]
pub struct StaticPage {
    /// Kind of page
    pub kind: PageKind,

    /// Item title (single-item pages)
    pub title: Option<String>,

    /// Active term or item id
    pub active_term_id: Option<i64>,

    /// Whether breadcrumbs are wanted. `None` derives it from `kind`.
    pub eligible: Option<bool>,
}

impl StaticPage {
    /// Create a context for the given page kind
    pub fn new(kind: PageKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Create a context for a single-item page with the given title
    pub fn single_item(title: impl Into<String>) -> Self {
        Self::new(PageKind::SingleItem).with_title(title)
    }

    /// Set item title (builder pattern)
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set active term id (builder pattern)
    pub fn with_active_term(mut self, id: i64) -> Self {
        self.active_term_id = Some(id);
        self
    }

    /// Force eligibility on or off (builder pattern)
    pub fn with_eligible(mut self, eligible: bool) -> Self {
        self.eligible = Some(eligible);
        self
    }
}

impl PageContext for StaticPage {
    fn is_tag_listing(&self) -> bool {
        self.kind == PageKind::TagListing
    }

    fn is_single_item(&self) -> bool {
        self.kind == PageKind::SingleItem
    }

    fn current_item_title(&self) -> Option<String> {
        if self.is_single_item() {
            self.title.clone()
        } else {
            None
        }
    }

    fn active_term_id(&self) -> Option<i64> {
        self.active_term_id
    }

    fn is_eligible(&self) -> bool {
        self.eligible.unwrap_or(self.kind != PageKind::Other)
    }
}
