//! Path resolver module
//!
//! Turns an absolute request URL into an ordered breadcrumb trail by
//! segmenting the path relative to the site root and resolving each segment
//! against the category and tag namespaces.

use crate::config::{ConfigError, ResolverConfig};
use crate::context::{PageContext, TermLookup};
use crate::models::{BreadcrumbEntry, BreadcrumbTrail, Taxonomy, TermRecord};
use crate::render::escape_html;
use thiserror::Error;
use tracing::{debug, warn};

/// Reasons no trail was produced
///
/// None of these are failures of the host request; they only mean the
/// breadcrumbs are not rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoTrail {
    #[error("URL has {count} path segments, more than the limit of {limit}")]
    TooManySegments { count: usize, limit: usize },

    #[error("URL '{url}' is not under site base '{base}'")]
    ForeignUrl { url: String, base: String },

    #[error("Trail would contain only the base entry")]
    BaseOnly,

    #[error("Page does not take breadcrumbs")]
    NotEligible,
}

/// Resolves request URLs into breadcrumb trails
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    config: ResolverConfig,
}

impl PathResolver {
    /// Create a resolver with a validated configuration
    pub fn new(config: ResolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a request URL into a trail, or `None` when there is nothing to show
    pub fn resolve(
        &self,
        full_url: &str,
        site_base_url: &str,
        page: &dyn PageContext,
        terms: &dyn TermLookup,
    ) -> Option<BreadcrumbTrail> {
        self.resolve_detailed(full_url, site_base_url, page, terms).ok()
    }

    /// Resolve a request URL into a trail, reporting why no trail was produced
    pub fn resolve_detailed(
        &self,
        full_url: &str,
        site_base_url: &str,
        page: &dyn PageContext,
        terms: &dyn TermLookup,
    ) -> Result<BreadcrumbTrail, NoTrail> {
        let result = self.build_trail(full_url, site_base_url, page, terms);
        if let Err(ref reason) = result {
            debug!(url = full_url, %reason, "no breadcrumb trail");
        }
        result
    }

    fn build_trail(
        &self,
        full_url: &str,
        site_base_url: &str,
        page: &dyn PageContext,
        terms: &dyn TermLookup,
    ) -> Result<BreadcrumbTrail, NoTrail> {
        let base_url = site_base_url.trim_end_matches('/');
        let mut segments =
            split_segments(full_url, base_url).ok_or_else(|| NoTrail::ForeignUrl {
                url: full_url.to_string(),
                base: base_url.to_string(),
            })?;

        // Deep URLs are usually server error pages; never resolve them
        if segments.len() > self.config.max_segments {
            return Err(NoTrail::TooManySegments {
                count: segments.len(),
                limit: self.config.max_segments,
            });
        }

        segments.retain(|segment| {
            let structural = self.config.is_structural_prefix(segment);
            if structural {
                debug!(segment, "dropping structural prefix");
            }
            !structural
        });

        let mut entries = vec![BreadcrumbEntry::base(
            escape_html(&self.config.home_label),
            base_url,
        )];

        let leaf = if page.is_single_item() {
            let item_slug = segments.pop().filter(|s| !s.is_empty());
            let title = page
                .current_item_title()
                .or_else(|| item_slug.map(str::to_string))
                .unwrap_or_default();
            Some(BreadcrumbEntry::leaf(
                escape_html(&title),
                canonical_request_url(full_url),
            ))
        } else {
            None
        };

        let tag_listing = page.is_tag_listing();
        let active_id = page.active_term_id();

        for segment in segments.into_iter().filter(|s| !s.is_empty()) {
            match lookup_segment(segment, tag_listing, terms) {
                Some((taxonomy, record)) => {
                    let active = active_id == Some(record.id);
                    debug!(segment, %taxonomy, id = record.id, active, "resolved segment");
                    entries.push(BreadcrumbEntry::term(
                        taxonomy,
                        escape_html(&record.name),
                        record.url,
                        active,
                    ));
                }
                None => debug!(segment, "segment is not a term, skipping"),
            }
        }

        entries.extend(leaf);

        BreadcrumbTrail::from_entries(entries).ok_or(NoTrail::BaseOnly)
    }
}

/// Resolve with the default configuration
pub fn resolve(
    full_url: &str,
    site_base_url: &str,
    page: &dyn PageContext,
    terms: &dyn TermLookup,
) -> Option<BreadcrumbTrail> {
    PathResolver::default().resolve(full_url, site_base_url, page, terms)
}

/// Look a segment up, category first unless the page is a tag listing
///
/// A failing lookup counts as a miss.
fn lookup_segment(
    segment: &str,
    tag_listing: bool,
    terms: &dyn TermLookup,
) -> Option<(Taxonomy, TermRecord)> {
    let order: &[Taxonomy] = if tag_listing {
        &[Taxonomy::Tag]
    } else {
        &[Taxonomy::Category, Taxonomy::Tag]
    };

    order
        .iter()
        .find_map(|&taxonomy| match terms.find_by_slug(segment, taxonomy) {
            Ok(found) => found.map(|record| (taxonomy, record)),
            Err(err) => {
                warn!(segment, %taxonomy, error = %err, "term lookup failed, treating as no match");
                None
            }
        })
}

/// Split a request URL into path segments relative to the site base
///
/// Query strings, fragments and surrounding slashes are ignored. The site
/// root itself yields a single empty segment. Returns `None` when the URL is
/// not under the base.
pub fn split_segments<'a>(full_url: &'a str, site_base_url: &str) -> Option<Vec<&'a str>> {
    let url = canonical_request_url(full_url);
    let base = site_base_url.trim_end_matches('/');

    let rest = url.strip_prefix(base)?;
    if !rest.is_empty() && !rest.starts_with('/') {
        return None;
    }

    Some(rest.trim_matches('/').split('/').collect())
}

/// Strip query, fragment and trailing slashes from a request URL
pub fn canonical_request_url(full_url: &str) -> &str {
    let end = full_url.find(['?', '#']).unwrap_or(full_url.len());
    full_url[..end].trim_end_matches('/')
}

/// Rebuild an absolute request URL from server request parts
pub fn request_url(https: bool, host: &str, request_uri: &str) -> String {
    let scheme = if https { "https" } else { "http" };
    format!("{}://{}{}", scheme, host, request_uri)
}
