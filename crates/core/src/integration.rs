//! Host integration
//!
//! One call per request: check that the page takes breadcrumbs, resolve the
//! URL, and render both outputs. The host decides where each string goes.

use crate::config::{ConfigError, ResolverConfig};
use crate::context::{PageContext, TermLookup};
use crate::models::{BreadcrumbTrail, ReportMetadata, TrailReport};
use crate::render::TrailRenderer;
use crate::resolver::{NoTrail, PathResolver};
use serde::Serialize;

/// Both rendered outputs for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedBreadcrumbs {
    /// JSON-LD block for the document head
    pub structured_data: String,

    /// Visible trail for the page body
    pub visible_trail: String,
}

/// Resolver and renderer sharing one configuration
#[derive(Debug, Clone, Default)]
pub struct Breadcrumbs {
    resolver: PathResolver,
    renderer: TrailRenderer,
}

impl Breadcrumbs {
    pub fn new(config: ResolverConfig) -> Result<Self, ConfigError> {
        let renderer = TrailRenderer::new(&config);
        let resolver = PathResolver::new(config)?;
        Ok(Self { resolver, renderer })
    }

    /// Render both outputs from a trail
    pub fn render(&self, trail: &BreadcrumbTrail) -> RenderedBreadcrumbs {
        RenderedBreadcrumbs {
            structured_data: self.renderer.structured_data(trail),
            visible_trail: self.renderer.visible_trail(trail),
        }
    }

    /// Resolve and render a request, honouring the page's eligibility
    pub fn for_request(
        &self,
        full_url: &str,
        site_base_url: &str,
        page: &dyn PageContext,
        terms: &dyn TermLookup,
    ) -> Result<(BreadcrumbTrail, RenderedBreadcrumbs), NoTrail> {
        if !page.is_eligible() {
            return Err(NoTrail::NotEligible);
        }

        let trail = self
            .resolver
            .resolve_detailed(full_url, site_base_url, page, terms)?;
        let rendered = self.render(&trail);
        Ok((trail, rendered))
    }

    /// Resolve and render a request into a serializable report
    pub fn report(
        &self,
        full_url: &str,
        site_base_url: &str,
        page: &dyn PageContext,
        terms: &dyn TermLookup,
    ) -> TrailReport {
        let mut report = TrailReport {
            request_url: full_url.to_string(),
            base_url: site_base_url.to_string(),
            trail: None,
            reason: None,
            structured_data: None,
            visible_trail: None,
            metadata: ReportMetadata::now(),
        };

        match self.for_request(full_url, site_base_url, page, terms) {
            Ok((trail, rendered)) => {
                report.trail = Some(trail);
                report.structured_data = Some(rendered.structured_data);
                report.visible_trail = Some(rendered.visible_trail);
            }
            Err(reason) => report.reason = Some(reason.to_string()),
        }

        report
    }
}

/// Resolve and render a request with the default configuration
pub fn render_for_request(
    full_url: &str,
    site_base_url: &str,
    page: &dyn PageContext,
    terms: &dyn TermLookup,
) -> Option<RenderedBreadcrumbs> {
    Breadcrumbs::default()
        .for_request(full_url, site_base_url, page, terms)
        .ok()
        .map(|(_, rendered)| rendered)
}
