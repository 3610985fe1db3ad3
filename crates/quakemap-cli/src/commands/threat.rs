//! `threat` subcommands: selection queries over the threat radius.

use std::path::Path;

use anyhow::Result;
use quakemap_lib::{quakes_threatening, reveal_for_quake, Error as LibError, PoiIndex};

use crate::output::{print_city_threats, print_quake_threats, OutputFormat};

use super::resolve_catalog;

/// Number of fuzzy suggestions attached to unknown-name errors.
const SUGGESTION_LIMIT: usize = 3;

pub fn handle_threat_quake(
    catalog_path: Option<&Path>,
    format: OutputFormat,
    title: &str,
) -> Result<()> {
    let catalog = resolve_catalog(catalog_path)?;
    let event = catalog
        .event_by_title(title)
        .ok_or_else(|| LibError::UnknownEvent {
            title: title.to_string(),
            suggestions: catalog.fuzzy_event_matches(title, SUGGESTION_LIMIT),
        })?;

    let cities = PoiIndex::build(&catalog.cities);
    let airports = PoiIndex::build(&catalog.airports);
    let reveal = reveal_for_quake(event, &cities, &airports);
    print_quake_threats(event, &reveal, format)
}

pub fn handle_threat_city(
    catalog_path: Option<&Path>,
    format: OutputFormat,
    name: &str,
) -> Result<()> {
    let catalog = resolve_catalog(catalog_path)?;
    let city = catalog
        .city_by_name(name)
        .ok_or_else(|| LibError::UnknownCity {
            name: name.to_string(),
            suggestions: catalog.fuzzy_city_matches(name, SUGGESTION_LIMIT),
        })?;

    let threats = quakes_threatening(city, &catalog.events);
    print_city_threats(city, &threats, format)
}
