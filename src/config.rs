//! Site configuration loading.
//!
//! The whole site lives in one YAML document, `publications.yaml` by default.
//! Top-level keys:
//!
//! ```yaml
//! profile:            # who you are (all fields required)
//!   name: Ada Lovelace
//!   title: Ph.D. Student
//!   ...
//! research:           # one-paragraph research statement
//!   interests: ...
//! news:               # optional; omit to drop the section
//!   - date: "2026-06"
//!     content: ...
//! publications:       # rendered in document order
//!   - title: ...
//!     ...
//! miscellaneous:      # optional; omit to drop the section
//!   - title: Teaching
//!     items: [...]
//! ```
//!
//! Parsing is strict about required fields: a publication without a `title`
//! or a profile without a `name` is a fatal [`ConfigError::Yaml`], never a
//! silent default. Optional fields are `Option` or defaulted, and renderers
//! check presence explicitly.
//!
//! ## Rich-text fields
//!
//! A handful of fields are author-trusted inline HTML, interpolated into the
//! page without escaping: `profile.bio`, `research.interests`,
//! `publication.description`, news contents, and miscellaneous text. This is
//! the document owner's own markup on their own page; everything else
//! (names, titles, venues, labels) is escaped.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// The full site document. One of these is loaded per run; it is never
/// mutated, so a rerun on the same file produces byte-identical output.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub profile: Profile,
    pub research: Research,
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub news: Vec<NewsItem>,
    #[serde(default)]
    pub miscellaneous: Vec<MiscSection>,
}

/// The researcher's identity block. Every field is required: the profile
/// card interpolates all of them and there is no sensible fallback for a
/// missing advisor or photo.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub department: String,
    pub institution: String,
    pub institution_url: String,
    pub advisor: String,
    pub advisor_url: String,
    /// Free-text continuation of the intro sentence. Inline HTML allowed.
    pub bio: String,
    pub email: String,
    pub scholar: String,
    pub twitter: String,
    pub github: String,
    /// Relative path to the profile photo.
    pub photo: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Research {
    /// One-paragraph research statement. Inline HTML allowed.
    pub interests: String,
}

/// A single publication entry. Entries render in document order; there is
/// no sorting by year or venue.
#[derive(Debug, Clone, Deserialize)]
pub struct Publication {
    pub title: String,
    /// Relative path to the teaser image.
    pub image: String,
    /// Ordered author list, rendered verbatim.
    pub authors: Vec<Author>,
    #[serde(default)]
    pub links: Links,
    pub venue: String,
    pub year: u32,
    #[serde(default)]
    pub oral: bool,
    #[serde(default)]
    pub spotlight: bool,
    /// Shown alongside the venue when present, independent of oral/spotlight.
    pub award: Option<String>,
    /// One-paragraph summary shown under the entry. Inline HTML allowed.
    pub description: String,
    /// Marks a representative work with a tinted row background.
    #[serde(default)]
    pub highlight: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub name: String,
    /// Homepage link; empty string counts as absent.
    pub url: Option<String>,
    /// The site owner, rendered emphasized wherever they appear in the list.
    #[serde(default)]
    pub is_me: bool,
}

/// The fixed set of per-publication links. Modeled as named optional fields
/// rather than a free-form map so that the render order and the label for
/// each key are decided here, not by the document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    pub project: Option<String>,
    pub paper: Option<String>,
    pub arxiv: Option<String>,
    pub code: Option<String>,
    pub video: Option<String>,
    pub supplement: Option<String>,
    pub data: Option<String>,
}

impl Links {
    /// Present, non-empty links paired with their display label, in the
    /// fixed label-table order. Absent and empty-string entries are skipped.
    pub fn labeled(&self) -> Vec<(&'static str, &str)> {
        [
            ("project page", &self.project),
            ("paper", &self.paper),
            ("arXiv", &self.arxiv),
            ("code", &self.code),
            ("video", &self.video),
            ("supplement", &self.supplement),
            ("data", &self.data),
        ]
        .into_iter()
        .filter_map(|(label, url)| match url.as_deref() {
            Some(u) if !u.is_empty() => Some((label, u)),
            _ => None,
        })
        .collect()
    }

    /// Where the publication title should point: the project page wins,
    /// then the arXiv entry, then the paper PDF, then a placeholder anchor.
    pub fn title_target(&self) -> &str {
        [&self.project, &self.arxiv, &self.paper]
            .into_iter()
            .find_map(|url| url.as_deref().filter(|u| !u.is_empty()))
            .unwrap_or("#")
    }
}

/// A news entry. The date is free-form text ("2026-06", "Jun 2026", ...);
/// entries without one render as bare content.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsItem {
    pub date: Option<String>,
    /// Inline HTML allowed.
    pub content: String,
}

/// One block under the Miscellaneous heading. Title, paragraph, and item
/// list are independent: a section may have any combination of the three.
#[derive(Debug, Clone, Deserialize)]
pub struct MiscSection {
    pub title: Option<String>,
    /// Inline HTML allowed.
    pub content: Option<String>,
    #[serde(default)]
    pub items: Vec<MiscItem>,
}

/// A miscellaneous list entry: either a bare string, or a structured record
/// with an optional bolded label and an optional wrapping link.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MiscItem {
    Plain(String),
    Detailed {
        label: Option<String>,
        #[serde(default)]
        text: String,
        link: Option<String>,
    },
}

/// Load and parse the site document.
///
/// A missing file is reported as [`ConfigError::NotFound`] rather than a
/// bare IO error so the CLI can name the path it looked for. Parse failures
/// (malformed YAML, missing required fields) abort immediately; nothing is
/// written on any error path.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&raw)?)
}

/// A documented starter `publications.yaml`, printed by `gen-config`.
///
/// Kept parseable: the gen-config output must always be a valid input.
pub fn stock_config_yaml() -> &'static str {
    r#"# scholar-page site document.
#
# Run `scholar-page build` in the directory containing this file to render
# index.html. The stylesheet (stylesheet.css), favicon, and images are
# referenced by relative path and are yours to supply.
#
# Fields marked (html ok) may contain inline HTML; it is emitted verbatim.

profile:
  name: Ada Lovelace
  title: Ph.D. Student
  department: Department of Computer Science
  institution: Example University
  institution_url: https://www.example.edu/
  advisor: Charles Babbage
  advisor_url: https://babbage.example.edu/
  # Continues the generated intro sentence. (html ok)
  bio: >-
    I work on analytical engines and the programs that run on them.
  email: ada@example.edu
  scholar: https://scholar.google.com/citations?user=XXXXXXX
  twitter: https://twitter.com/ada
  github: https://github.com/ada
  photo: images/profile.jpg

research:
  # One paragraph under the Research heading. (html ok)
  interests: >-
    My research asks whether a machine that manipulates symbols can be said
    to compose music.

# Optional. Omit the key entirely to drop the News section.
news:
  - date: "2026-06"
    content: Our paper on symbolic computation was accepted to SOMECONF 2026.
  - content: Entries without a date render as plain items.

publications:
  - title: A Note on the Analytical Engine
    image: images/engine.png
    authors:
      - name: Ada Lovelace
        is_me: true          # emphasized wherever it appears
      - name: Charles Babbage
        url: https://babbage.example.edu/
      - name: Luigi Menabrea # no url: plain text
    # All link keys are optional. The title links to project, else arxiv,
    # else paper.
    links:
      project: https://example.edu/engine/
      paper: papers/engine.pdf
      arxiv: https://arxiv.org/abs/0000.00000
      code: https://github.com/ada/engine
    venue: SOMECONF
    year: 2026
    oral: true               # wins over spotlight if both are set
    # spotlight: true
    # award: Best Paper Award
    highlight: true          # tinted row background for representative work
    # (html ok)
    description: >-
      Sketches a general-purpose engine and argues it exceeds mere number
      crunching.

# Optional. Omit the key entirely to drop the Miscellaneous section.
# Each section may carry any combination of title, content, and items.
miscellaneous:
  - title: Teaching
    items:
      - TA, Introduction to Computation, Fall 2025
      - label: Reviewer
        text: SOMECONF 2026, OTHERCONF 2025
        link: https://example.edu/reviews
  - content: A section may also be a single paragraph with no title or list.
"#
}
