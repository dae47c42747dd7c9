//! Visible "You are here" trail renderer

use crate::models::BreadcrumbTrail;
use crate::render::escape_html;

/// Text preceding the trail
pub const LEAD_IN: &str = "You are here: ";

/// Text between two rendered entries
pub const SEPARATOR: &str = " \u{bb} ";

/// Render non-leaf entries; the active one as plain text, the rest as links
///
/// The leaf is left out because the item title is already shown on the page.
pub(crate) fn render(trail: &BreadcrumbTrail, class: &str, style: &str) -> String {
    let mut sentence = String::from(LEAD_IN);

    for (idx, entry) in trail.iter().filter(|e| !e.is_leaf()).enumerate() {
        if idx > 0 {
            sentence.push_str(SEPARATOR);
        }

        if entry.active {
            sentence.push_str(&entry.label);
        } else {
            sentence.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                escape_html(&entry.url),
                entry.label
            ));
        }
    }

    format!(
        "<div class=\"{}\" style=\"{}\">{}</div>",
        class, style, sentence
    )
}
