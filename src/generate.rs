//! The build pipeline: load, render, write.
//!
//! A run is one straight-line pass — no retries, no partial output. The
//! document is a single in-memory string until the final write, so a failed
//! run never leaves a half-written page behind: either the old `index.html`
//! survives untouched or the new one replaces it wholesale.

use crate::config::{self, ConfigError, SiteConfig};
use crate::render;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What a successful run produced, kept around for CLI reporting.
pub struct RenderedSite {
    pub site: SiteConfig,
    pub bytes_written: usize,
}

/// Run the full pipeline: parse the site document, render the page, and
/// write it to `output_path`, overwriting unconditionally. The write is one
/// scoped call; the file handle is released whether it succeeds or fails.
pub fn generate(config_path: &Path, output_path: &Path) -> Result<RenderedSite, GenerateError> {
    let site = config::load_config(config_path)?;
    let html = render::render_page(&site).into_string();
    fs::write(output_path, &html)?;
    Ok(RenderedSite {
        site,
        bytes_written: html.len(),
    })
}
