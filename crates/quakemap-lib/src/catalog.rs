//! Typed catalog loading and name lookups.
//!
//! The catalog is the hand-off point from upstream ingestion: feeds and
//! polygon files are parsed elsewhere, and this module loads the resulting
//! typed records (regions, cities, airports, events) from a plain JSON
//! serialization of the data model.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::event::EarthquakeEvent;
use crate::geo::GeoPoint;
use crate::region::Region;

/// Default filename for a stored catalog.
const CATALOG_FILENAME: &str = "catalog.json";

/// Similarity floor for fuzzy name suggestions.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// A named point of interest (city or airport).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Display name, unique within its catalog list.
    pub name: String,
    /// Surface location.
    pub location: GeoPoint,
}

impl PointOfInterest {
    /// Create a point of interest.
    pub fn new(name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// In-memory catalog of regions, points of interest and earthquake events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Named regions with their polygon outlines.
    #[serde(default)]
    pub regions: Vec<Region>,
    /// City markers.
    #[serde(default)]
    pub cities: Vec<PointOfInterest>,
    /// Airport markers.
    #[serde(default)]
    pub airports: Vec<PointOfInterest>,
    /// Earthquake events, unclassified until a classification pass runs.
    #[serde(default)]
    pub events: Vec<EarthquakeEvent>,
}

impl Catalog {
    /// Find an event by title (case-insensitive).
    pub fn event_by_title(&self, title: &str) -> Option<&EarthquakeEvent> {
        self.events
            .iter()
            .find(|event| event.title.eq_ignore_ascii_case(title))
    }

    /// Find a city by name (case-insensitive).
    pub fn city_by_name(&self, name: &str) -> Option<&PointOfInterest> {
        self.cities
            .iter()
            .find(|city| city.name.eq_ignore_ascii_case(name))
    }

    /// Event titles similar to `title`, best matches first.
    pub fn fuzzy_event_matches(&self, title: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(
            self.events.iter().map(|event| event.title.as_str()),
            title,
            limit,
        )
    }

    /// City names similar to `name`, best matches first.
    pub fn fuzzy_city_matches(&self, name: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(self.cities.iter().map(|city| city.name.as_str()), name, limit)
    }
}

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(Error::CatalogNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "loading catalog");
    let raw = fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&raw)?;

    info!(
        regions = catalog.regions.len(),
        cities = catalog.cities.len(),
        airports = catalog.airports.len(),
        events = catalog.events.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Resolve the default catalog location inside the platform data directory.
pub fn default_catalog_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("io", "quakemap", "quakemap")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(CATALOG_FILENAME))
}

/// Score candidate names against a query and keep the closest ones.
fn fuzzy_matches<'a>(
    names: impl Iterator<Item = &'a str>,
    query: &str,
    limit: usize,
) -> Vec<String> {
    let query_lower = query.to_lowercase();
    let mut scored: Vec<(f64, &str)> = names
        .map(|name| {
            let score = strsim::jaro_winkler(&name.to_lowercase(), &query_lower);
            (score, name)
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}
