//! ANSI colored output formatter
//!
//! This module provides colorful terminal output for trails and reports.

use crate::models::{BreadcrumbEntry, BreadcrumbTrail, EntryKind, TrailReport};
use colored::{ColoredString, Colorize};

/// Color an entry label by kind; active entries are bold
fn paint(entry: &BreadcrumbEntry) -> ColoredString {
    let label = entry.label.as_str();
    let painted = match entry.kind {
        EntryKind::Base => label.bright_white(),
        EntryKind::Category => label.bright_cyan(),
        EntryKind::Tag => label.bright_magenta(),
        EntryKind::Leaf => label.bright_yellow(),
    };

    if entry.active {
        painted.bold().underline()
    } else {
        painted
    }
}

/// Get icon for entry kind
fn entry_icon(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Base => "\u{1f3e0}",
        EntryKind::Category => "\u{1f4c1}",
        EntryKind::Tag => "\u{1f3f7}",
        EntryKind::Leaf => "\u{1f4c4}",
    }
}

/// Format a trail on one line, entries joined by a dim separator
pub fn format_trail_ansi(trail: &BreadcrumbTrail) -> String {
    let separator = format!(" {} ", "\u{bb}".dimmed());
    trail
        .iter()
        .map(|e| paint(e).to_string())
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Format a report as ANSI colored text
pub fn format_ansi(report: &TrailReport) -> String {
    let mut output = String::new();

    // Header
    output.push_str(&format!(
        "\n{}\n\n",
        "  Breadcrumb Trail  ".bold().on_blue()
    ));

    output.push_str(&format!("{} {}\n", "URL:".bold(), report.request_url));
    output.push_str(&format!("{} {}\n\n", "Base:".bold(), report.base_url));

    match &report.trail {
        Some(trail) => {
            output.push_str(&format!("{}\n\n", format_trail_ansi(trail)));

            for (idx, entry) in trail.iter().enumerate() {
                let kind = if entry.kind.is_term() {
                    format!(" [{}]", entry.kind.label())
                } else {
                    String::new()
                };
                output.push_str(&format!(
                    "  {} {} {}{} {}\n",
                    format!("{:>2}.", idx + 1).dimmed(),
                    entry_icon(entry.kind),
                    paint(entry),
                    kind.dimmed(),
                    entry.url.dimmed()
                ));
            }
        }
        None => {
            output.push_str(&format!(
                "{} {}\n",
                "No trail:".bright_red().bold(),
                report.reason.as_deref().unwrap_or("unknown")
            ));
        }
    }

    // Footer
    output.push_str(&format!(
        "\n{}\n",
        format!(
            "Resolved at {} (v{})",
            report.metadata.timestamp, report.metadata.tool_version
        )
        .dimmed()
    ));

    output
}
