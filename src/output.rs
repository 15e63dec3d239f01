//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is information-centric, not file-centric: the report leads with
//! who the page is for and what it contains, with the venue shown as an
//! indented context line under each publication. Optional sections (news,
//! miscellaneous) appear only when they will appear on the page.
//!
//! ```text
//! Profile
//!     A. Researcher (Ph.D. Student, Some University)
//! News (2 items)
//! Publications
//! 001 A Note on the Analytical Engine (Oral)
//!     SOMECONF, 2026
//! 002 Another Paper
//!     OTHERCONF, 2025
//! Miscellaneous
//! 001 Teaching
//! 002 (untitled)
//!
//! Generated index.html (18432 bytes)
//! ```
//!
//! # Architecture
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::config::{Publication, SiteConfig};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// The single presentation-tier word for a publication, if any. Mirrors the
/// page: oral wins when both flags are set.
fn tier(publication: &Publication) -> Option<&'static str> {
    if publication.oral {
        Some("Oral")
    } else if publication.spotlight {
        Some("Spotlight")
    } else {
        None
    }
}

/// Header line for one publication: index, title, and tier tag.
///
/// ```text
/// 001 A Note on the Analytical Engine (Oral)
/// ```
fn publication_header(index: usize, publication: &Publication) -> String {
    match tier(publication) {
        Some(t) => format!("{} {} ({})", format_index(index), publication.title, t),
        None => format!("{} {}", format_index(index), publication.title),
    }
}

/// Header line for one miscellaneous section: untitled sections show a
/// placeholder, since the title is genuinely optional on the page too.
fn section_header(index: usize, title: Option<&str>) -> String {
    match title {
        Some(t) if !t.is_empty() => format!("{} {}", format_index(index), t),
        _ => format!("{} (untitled)", format_index(index)),
    }
}

/// Format the content inventory shared by `build` and `check`.
pub fn format_site_summary(site: &SiteConfig) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Profile".to_string());
    lines.push(format!(
        "{}{} ({}, {})",
        indent(1),
        site.profile.name,
        site.profile.title,
        site.profile.institution
    ));

    if !site.news.is_empty() {
        let noun = if site.news.len() == 1 { "item" } else { "items" };
        lines.push(format!("News ({} {})", site.news.len(), noun));
    }

    lines.push("Publications".to_string());
    for (i, publication) in site.publications.iter().enumerate() {
        lines.push(publication_header(i + 1, publication));
        lines.push(format!(
            "{}{}, {}",
            indent(1),
            publication.venue,
            publication.year
        ));
    }

    if !site.miscellaneous.is_empty() {
        lines.push("Miscellaneous".to_string());
        for (i, section) in site.miscellaneous.iter().enumerate() {
            lines.push(section_header(i + 1, section.title.as_deref()));
        }
    }

    lines
}

/// Format the full build report: the site summary plus the output line.
pub fn format_build_output(site: &SiteConfig, output_path: &Path, bytes: usize) -> Vec<String> {
    let mut lines = format_site_summary(site);
    lines.push(String::new());
    lines.push(format!(
        "Generated {} ({} bytes)",
        output_path.display(),
        bytes
    ));
    lines
}

pub fn print_site_summary(site: &SiteConfig) {
    for line in format_site_summary(site) {
        println!("{}", line);
    }
}

pub fn print_build_output(site: &SiteConfig, output_path: &Path, bytes: usize) {
    for line in format_build_output(site, output_path, bytes) {
        println!("{}", line);
    }
}
