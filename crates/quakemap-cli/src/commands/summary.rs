//! `summary` subcommand: classify the whole catalog and report counts.

use std::path::Path;

use anyhow::{Context, Result};
use quakemap_lib::{classify_events, RegionIndex};

use crate::output::{print_report, OutputFormat};

use super::resolve_catalog;

pub fn handle_summary(catalog_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let mut catalog = resolve_catalog(catalog_path)?;
    let regions = std::mem::take(&mut catalog.regions);
    let index = RegionIndex::build(regions).context("failed to build the region index")?;
    let report =
        classify_events(&mut catalog.events, &index).context("failed to classify events")?;
    print_report(&report, format)
}
