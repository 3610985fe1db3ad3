//! Land/ocean classification of events and the per-region summary report.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::event::{Classification, EarthquakeEvent};
use crate::region::RegionIndex;

/// Aggregate counts produced by one classification pass.
///
/// The per-region counts and the ocean count always sum to `total_events`;
/// every event lands in exactly one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationReport {
    /// On-land event counts keyed by region name. Only regions with at least
    /// one event appear; the map iterates in name order.
    pub land_counts: BTreeMap<String, usize>,
    /// Events outside every known region.
    pub ocean_count: usize,
    /// Total number of classified events.
    pub total_events: usize,
}

impl ClassificationReport {
    /// On-land count for a single region, zero when the region saw no
    /// events.
    pub fn count_for(&self, region: &str) -> usize {
        self.land_counts.get(region).copied().unwrap_or(0)
    }

    /// Sum of all per-region on-land counts.
    pub fn land_total(&self) -> usize {
        self.land_counts.values().sum()
    }
}

/// Classify every event as on land or in the ocean.
///
/// Magnitude and depth are validated up front so a bad record fails the pass
/// before any event is tagged; classification is all-or-nothing. Each event
/// is tagged exactly once and is expected to stay frozen afterwards.
pub fn classify_events(
    events: &mut [EarthquakeEvent],
    index: &RegionIndex,
) -> Result<ClassificationReport> {
    for event in events.iter() {
        event.validate()?;
    }

    let mut land_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut ocean_count = 0usize;

    for event in events.iter_mut() {
        match index.classify(&event.location) {
            Some(region) => {
                *land_counts.entry(region.name.clone()).or_default() += 1;
                event.set_classification(Classification::Land {
                    country: region.name.clone(),
                });
            }
            None => {
                ocean_count += 1;
                event.set_classification(Classification::Ocean);
            }
        }
    }

    let report = ClassificationReport {
        land_counts,
        ocean_count,
        total_events: events.len(),
    };

    info!(
        total = report.total_events,
        on_land = report.land_total(),
        ocean = report.ocean_count,
        "classified events"
    );

    Ok(report)
}
