//! Trail rendering module
//!
//! Two independent renderers over the same read-only trail: a schema.org
//! JSON-LD block for the document head and a visible "You are here" trail
//! for the page body. Neither can fail on a valid trail.

mod schema;
mod visible;

pub use visible::{LEAD_IN, SEPARATOR};

use crate::config::ResolverConfig;
use crate::models::BreadcrumbTrail;

/// Renders trails with the markup settings of a resolver config
#[derive(Debug, Clone)]
pub struct TrailRenderer {
    schema_class: String,
    container_class: String,
    container_style: String,
}

impl Default for TrailRenderer {
    fn default() -> Self {
        Self::new(&ResolverConfig::default())
    }
}

impl TrailRenderer {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            schema_class: config.schema_class.clone(),
            container_class: config.container_class.clone(),
            container_style: config.container_style.clone(),
        }
    }

    /// Render the JSON-LD `BreadcrumbList` block
    pub fn structured_data(&self, trail: &BreadcrumbTrail) -> String {
        schema::render(trail, &self.schema_class)
    }

    /// Render the visible trail
    pub fn visible_trail(&self, trail: &BreadcrumbTrail) -> String {
        visible::render(trail, &self.container_class, &self.container_style)
    }
}

/// Render the JSON-LD block with default markup settings
pub fn render_structured_data(trail: &BreadcrumbTrail) -> String {
    TrailRenderer::default().structured_data(trail)
}

/// Render the visible trail with default markup settings
pub fn render_visible_trail(trail: &BreadcrumbTrail) -> String {
    TrailRenderer::default().visible_trail(trail)
}

/// Escape text for HTML element content and double-quoted attributes
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
