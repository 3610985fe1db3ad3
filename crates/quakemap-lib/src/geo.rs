//! Geographic primitives shared across the library.
//!
//! Coordinates are decimal degrees (latitude, longitude) on a spherical Earth
//! model. Distances are great-circle kilometers computed with the haversine
//! formula. Polygon containment treats latitude/longitude as a planar
//! coordinate space, matching the way region outlines are authored.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers, used by all great-circle math.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A location on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lon: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to another point in kilometers.
    pub fn distance_km(&self, other: &Self) -> f64 {
        let lat_a = self.lat.to_radians();
        let lat_b = other.lat.to_radians();
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let h = (d_lat / 2.0).sin().powi(2)
            + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
        // h can round just past 1.0 for antipodal points, which would make
        // the square root of (1 - h) NaN.
        let h = h.min(1.0);
        let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
        EARTH_RADIUS_KM * central_angle
    }

    /// True when both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// A closed polygon ring of surface locations.
///
/// The closing edge from the last vertex back to the first is implicit; the
/// first vertex does not need to be repeated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ring {
    vertices: Vec<GeoPoint>,
}

impl Ring {
    /// Create a ring from its vertices.
    pub fn new(vertices: Vec<GeoPoint>) -> Self {
        Self { vertices }
    }

    /// The ring's vertices in order.
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    /// Even-odd ray-casting containment test.
    ///
    /// Casts a ray from the query point and counts edge crossings; an odd
    /// count means inside. Points exactly on an edge may land on either side,
    /// but the answer is deterministic for a given ring and query point.
    /// Rings with fewer than three vertices bound no area and contain
    /// nothing.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = self.vertices.len() - 1;
        for i in 0..self.vertices.len() {
            let a = self.vertices[i];
            let b = self.vertices[j];
            // Only edges straddling the query latitude can cross the ray.
            if (a.lat > point.lat) != (b.lat > point.lat) {
                let crossing_lon =
                    (b.lon - a.lon) * (point.lat - a.lat) / (b.lat - a.lat) + a.lon;
                if point.lon < crossing_lon {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Smallest lat/lon-aligned box containing every vertex, or `None` for an
    /// empty ring.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = self.vertices.first()?;
        let mut bounds = BoundingBox {
            min_lat: first.lat,
            min_lon: first.lon,
            max_lat: first.lat,
            max_lon: first.lon,
        };
        for vertex in &self.vertices[1..] {
            bounds.min_lat = bounds.min_lat.min(vertex.lat);
            bounds.min_lon = bounds.min_lon.min(vertex.lon);
            bounds.max_lat = bounds.max_lat.max(vertex.lat);
            bounds.max_lon = bounds.max_lon.max(vertex.lon);
        }
        Some(bounds)
    }
}

/// Lat/lon-aligned bounding box used to prune containment tests.
///
/// Computed in the same planar coordinate space as the ray-casting test, so
/// it can only pass candidates through, never reject a point the ring would
/// contain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// True when the point lies inside or on the box.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lat >= self.min_lat
            && point.lat <= self.max_lat
            && point.lon >= self.min_lon
            && point.lon <= self.max_lon
    }
}
