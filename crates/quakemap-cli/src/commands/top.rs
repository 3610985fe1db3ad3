//! `top` subcommand: strongest events first.

use std::path::Path;

use anyhow::{Context, Result};
use quakemap_lib::top_events;

use crate::output::{print_ranked, OutputFormat};

use super::resolve_catalog;

pub fn handle_top(catalog_path: Option<&Path>, format: OutputFormat, limit: usize) -> Result<()> {
    let catalog = resolve_catalog(catalog_path)?;
    let ranked = top_events(&catalog.events, limit).context("failed to rank events")?;
    print_ranked(&ranked, format)
}
