//! Threat-radius model and the selection queries built on it.
//!
//! The threat radius grows exponentially with magnitude and is the single
//! measure of an event's reach: a point of interest is threatened exactly
//! when its great-circle distance from the epicenter is within the radius.
//! The relation is asymmetric by construction; its direction always follows
//! the earthquake's radius, never a radius around the city.

use std::cmp::Ordering;

use crate::catalog::PointOfInterest;
use crate::event::EarthquakeEvent;
use crate::geo::GeoPoint;
use crate::spatial::PoiIndex;

/// Kilometers per statute mile, as used by the threat-distance model.
pub const KM_PER_MILE: f64 = 1.6;

/// Maximum distance at which an event of the given magnitude is considered a
/// threat, in kilometers.
///
/// The model is `20 × 1.8^(2·magnitude − 5)` miles converted to kilometers,
/// so each whole unit of magnitude multiplies the radius by `1.8² = 3.24`.
pub fn threat_radius_km(magnitude: f64) -> f64 {
    let miles = 20.0 * 1.8_f64.powf(2.0 * magnitude - 5.0);
    miles * KM_PER_MILE
}

/// True when `location` lies within the event's threat radius.
pub fn within_threat(event: &EarthquakeEvent, location: &GeoPoint) -> bool {
    event.location.distance_km(location) <= threat_radius_km(event.magnitude)
}

/// Markers revealed by selecting a single earthquake.
///
/// Every entry pairs a point of interest with its great-circle distance from
/// the epicenter in kilometers, sorted ascending. Anything absent from both
/// lists lies outside the threat radius and is the caller's to hide.
#[derive(Debug, Clone)]
pub struct ThreatReveal<'a> {
    /// The event's threat radius in kilometers.
    pub radius_km: f64,
    /// Cities inside the radius.
    pub cities: Vec<(&'a PointOfInterest, f64)>,
    /// Airports inside the radius.
    pub airports: Vec<(&'a PointOfInterest, f64)>,
}

/// Resolve the reveal set for a selected earthquake.
///
/// Each call computes a fresh result from the current indexes; selection
/// state, if any, lives with the caller.
pub fn reveal_for_quake<'a>(
    event: &EarthquakeEvent,
    cities: &'a PoiIndex,
    airports: &'a PoiIndex,
) -> ThreatReveal<'a> {
    let radius_km = threat_radius_km(event.magnitude);
    ThreatReveal {
        radius_km,
        cities: cities.within_radius_km(&event.location, radius_km),
        airports: airports.within_radius_km(&event.location, radius_km),
    }
}

/// Resolve the earthquakes threatening a selected point of interest.
///
/// An event qualifies when its own threat radius covers the point's
/// location. Returns `(event, distance_km)` pairs sorted by ascending
/// distance.
pub fn quakes_threatening<'a>(
    poi: &PointOfInterest,
    events: &'a [EarthquakeEvent],
) -> Vec<(&'a EarthquakeEvent, f64)> {
    let mut hits: Vec<(&EarthquakeEvent, f64)> = events
        .iter()
        .filter_map(|event| {
            let distance = event.location.distance_km(&poi.location);
            (distance <= threat_radius_km(event.magnitude)).then_some((event, distance))
        })
        .collect();

    hits.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    hits
}
