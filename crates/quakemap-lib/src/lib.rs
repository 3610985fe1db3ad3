//! quakemap library entry points.
//!
//! This crate exposes helpers to load an earthquake catalog, classify events
//! as on land or in the ocean against region polygons, rank them by
//! magnitude, and answer threat-radius queries against cities and airports.
//! The CLI and any service embedding should go through the re-exports below
//! rather than reaching into the modules directly.
//!

#![deny(warnings)]

pub mod catalog;
pub mod classifier;
pub mod error;
pub mod event;
pub mod geo;
pub mod rank;
pub mod region;
pub mod spatial;
pub mod threat;

pub use catalog::{default_catalog_path, load_catalog, Catalog, PointOfInterest};
pub use classifier::{classify_events, ClassificationReport};
pub use error::{Error, Result};
pub use event::{AgeCategory, Classification, DepthBand, EarthquakeEvent, MagnitudeBand};
pub use geo::{GeoPoint, Ring, EARTH_RADIUS_KM};
pub use rank::{rank_events, top_events};
pub use region::{Region, RegionIndex};
pub use spatial::PoiIndex;
pub use threat::{
    quakes_threatening, reveal_for_quake, threat_radius_km, within_threat, ThreatReveal,
    KM_PER_MILE,
};
