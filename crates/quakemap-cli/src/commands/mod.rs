//! Subcommand handlers for the quakemap CLI.

mod summary;
mod threat;
mod top;

pub use summary::handle_summary;
pub use threat::{handle_threat_city, handle_threat_quake};
pub use top::handle_top;

use std::path::Path;

use anyhow::{Context, Result};
use quakemap_lib::{default_catalog_path, load_catalog, Catalog};

/// Load the catalog from the override path or the default location.
pub(crate) fn resolve_catalog(path: Option<&Path>) -> Result<Catalog> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_catalog_path().context("failed to resolve the default catalog path")?,
    };
    load_catalog(&path)
        .with_context(|| format!("failed to load catalog from {}", path.display()))
}
