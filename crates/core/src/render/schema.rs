//! schema.org `BreadcrumbList` JSON-LD renderer

use crate::models::BreadcrumbTrail;
use serde_json::{json, Value};

/// Render every entry, leaf included, as a `ListItem` with 1-based positions
pub(crate) fn render(trail: &BreadcrumbTrail, class: &str) -> String {
    // Compact serialization: no line breaks or tabs inside the block
    format!(
        "<script type=\"application/ld+json\" class=\"{}\">{}</script>\n",
        class,
        script_safe(&breadcrumb_list(trail).to_string())
    )
}

/// Escape markup characters inside JSON text so a value cannot close the
/// `<script>` element. The `\uXXXX` forms parse back to the same strings.
fn script_safe(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(c),
        }
    }
    out
}

fn breadcrumb_list(trail: &BreadcrumbTrail) -> Value {
    let items: Vec<Value> = trail
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            json!({
                "@type": "ListItem",
                "position": idx + 1,
                "name": entry.label,
                "item": entry.url,
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}
