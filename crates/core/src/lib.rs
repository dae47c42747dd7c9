//! url_breadcrumbs_core - Core library for URL-structure breadcrumbs
//!
//! This crate derives a breadcrumb trail purely from the structure of a
//! request URL, independent of any permalink or page hierarchy, and renders
//! it twice: as a schema.org `BreadcrumbList` JSON-LD block and as a visible
//! "You are here" trail.
//!
//! # Features
//!
//! - **URL Segmentation**: Splits the request path relative to the site root,
//!   drops structural prefix words (`category`, `tag`) and rejects overly
//!   deep URLs.
//! - **Term Resolution**: Maps segments to category or tag terms through a
//!   host-supplied [`TermLookup`], categories first unless the page is a tag
//!   listing.
//! - **Active Detection**: Marks the term the page is about, and appends an
//!   active leaf for single-item pages.
//! - **Rendering**: Structured data and visible trail from the same
//!   read-only trail.
//! - **Multiple Output Formats**: JSON, YAML, HTML and ANSI-colored reports.
//!
//! # Example
//!
//! ```rust
//! use url_breadcrumbs_core::{
//!     render_structured_data, render_visible_trail, resolve, PageKind, StaticPage, Taxonomy,
//!     TermCatalog, TermRecord,
//! };
//!
//! let terms = TermCatalog::new().with_term(
//!     Taxonomy::Category,
//!     "electronics",
//!     TermRecord::new("Electronics", 5, "https://site.test/electronics"),
//! );
//! let page = StaticPage::new(PageKind::CategoryListing).with_active_term(5);
//!
//! let trail = resolve("https://site.test/electronics", "https://site.test", &page, &terms)
//!     .expect("trail");
//!
//! assert!(render_visible_trail(&trail).contains("Electronics"));
//! assert!(render_structured_data(&trail).contains("\"position\":2"));
//! ```

pub mod catalog;
pub mod config;
pub mod context;
pub mod integration;
pub mod models;
pub mod output;
pub mod render;
pub mod resolver;

// Re-exports for convenience
pub use catalog::{CatalogError, CatalogFile, TermCatalog, TermSpec};
pub use config::{ConfigError, ResolverConfig, DEFAULT_MAX_SEGMENTS};
pub use context::{LookupError, PageContext, PageKind, StaticPage, TermLookup};
pub use integration::{render_for_request, Breadcrumbs, RenderedBreadcrumbs};
pub use models::{
    BreadcrumbEntry, BreadcrumbTrail, EntryKind, ReportMetadata, Taxonomy, TermRecord,
    TrailReport,
};
pub use output::{format_output, format_output_batch, FormatError, OutputFormat};
pub use render::{escape_html, render_structured_data, render_visible_trail, TrailRenderer};
pub use resolver::{request_url, resolve, split_segments, NoTrail, PathResolver};
