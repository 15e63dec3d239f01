//! # Scholar Page
//!
//! A minimal static homepage generator for academic researchers. One YAML
//! document describes the whole site — profile, research statement,
//! publication list, optional news and miscellaneous sections — and one run
//! renders one complete `index.html`.
//!
//! # Architecture: One-Pass Pipeline
//!
//! ```text
//! publications.yaml  →  SiteConfig  →  Markup fragments  →  index.html
//!       (config)          (config)        (render)          (generate)
//! ```
//!
//! Every stage is pure except the endpoints: the loader reads one file, the
//! writer writes one file, and everything in between is a function from
//! typed records to immutable HTML fragments. Rerunning the pipeline on an
//! unchanged document produces byte-identical output — no timestamps, no
//! randomness, no incremental state.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | YAML site document: data model, loader, stock starter config |
//! | [`render`] | Maud fragment renderers and the fixed-order page assembler |
//! | [`generate`] | The build pipeline: load, render, write |
//! | [`output`] | CLI output formatting — information-first run reports |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera. The page has no
//! template-level logic to speak of — fixed sections, conditional presence,
//! list iteration — so fragments-as-functions fit exactly:
//!
//! - **Compile-time checking**: malformed HTML is a build error.
//! - **Type-safe**: template variables are Rust expressions, no
//!   stringly-typed lookups.
//! - **Escaped by default**: only the designated rich-text fields are
//!   injected verbatim.
//! - **Zero runtime files**: no template directory to ship or get out of
//!   sync.
//!
//! ## Named Optional Fields Over Dynamic Maps
//!
//! Publication links are a struct of `Option<String>` fields, not a
//! free-form map. The fixed label table and its render order live in one
//! place ([`config::Links::labeled`]), presence checks are explicit, and a
//! typo'd key is a parse-time surprise rather than a silently dropped link.
//!
//! ## Wholesale Regeneration
//!
//! The output is a single page built in memory and written in one call.
//! There is nothing to invalidate, nothing to clean up on failure, and the
//! old page survives untouched unless the new one replaces it completely.

pub mod config;
pub mod generate;
pub mod output;
pub mod render;
