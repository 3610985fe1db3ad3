//! KD-tree spatial index over points of interest.
//!
//! Surface locations are projected onto Earth-centered 3D coordinates so the
//! tree can prune with squared Euclidean (chord) distances. Great-circle
//! radii are converted to chord lengths for the tree query, then every
//! candidate is confirmed against the exact haversine distance in double
//! precision, so the f32 tree coordinates never decide membership.

use kiddo::float::kdtree::KdTree;
use kiddo::SquaredEuclidean;
use tracing::debug;

use crate::catalog::PointOfInterest;
use crate::geo::{GeoPoint, EARTH_RADIUS_KM};

/// KD-tree bucket size (kiddo default).
const BUCKET_SIZE: usize = 32;

/// Relative inflation applied to chord radii before the exact-distance
/// filter, covering the f32 rounding of tree coordinates.
const CHORD_SLACK: f64 = 1.001;

/// Absolute inflation in kilometers, keeping tiny radii robust.
const CHORD_PAD_KM: f64 = 0.01;

/// Spatial index over a fixed set of points of interest.
pub struct PoiIndex {
    /// KD-tree for pruning. Items are indices into `pois`.
    tree: KdTree<f32, usize, 3, BUCKET_SIZE, u32>,
    pois: Vec<PointOfInterest>,
}

impl PoiIndex {
    /// Index a set of points of interest.
    pub fn build(pois: &[PointOfInterest]) -> Self {
        let pois = pois.to_vec();
        let mut tree: KdTree<f32, usize, 3, BUCKET_SIZE, u32> = KdTree::new();
        for (index, poi) in pois.iter().enumerate() {
            tree.add(&to_coords(&poi.location), index);
        }

        debug!(poi_count = pois.len(), "built poi index");
        Self { tree, pois }
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.pois.len()
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }

    /// Iterate the indexed points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PointOfInterest> {
        self.pois.iter()
    }

    /// Find the `k` nearest points to `center`.
    ///
    /// Returns `(poi, distance_km)` pairs sorted by ascending great-circle
    /// distance.
    pub fn nearest(&self, center: &GeoPoint, k: usize) -> Vec<(&PointOfInterest, f64)> {
        if k == 0 || self.pois.is_empty() {
            return Vec::new();
        }

        let query = to_coords(center);
        let mut results: Vec<(&PointOfInterest, f64)> = self
            .tree
            .nearest_n::<SquaredEuclidean>(&query, k)
            .into_iter()
            .map(|neighbor| {
                let poi = &self.pois[neighbor.item];
                (poi, center.distance_km(&poi.location))
            })
            .collect();

        results.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        results
    }

    /// Find every point within `radius_km` great-circle kilometers of
    /// `center`.
    ///
    /// Returns `(poi, distance_km)` pairs sorted by ascending distance. The
    /// tree prunes on a slightly inflated chord radius; membership itself is
    /// decided by the exact haversine distance, with points exactly at the
    /// radius included.
    pub fn within_radius_km(
        &self,
        center: &GeoPoint,
        radius_km: f64,
    ) -> Vec<(&PointOfInterest, f64)> {
        if radius_km < 0.0 || self.pois.is_empty() {
            return Vec::new();
        }

        let query = to_coords(center);
        let chord = chord_length_km(radius_km) * CHORD_SLACK + CHORD_PAD_KM;
        let squared_chord = (chord * chord) as f32;

        let mut results: Vec<(&PointOfInterest, f64)> = self
            .tree
            .within::<SquaredEuclidean>(&query, squared_chord)
            .into_iter()
            .filter_map(|neighbor| {
                let poi = &self.pois[neighbor.item];
                let distance = center.distance_km(&poi.location);
                (distance <= radius_km).then_some((poi, distance))
            })
            .collect();

        results.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        results
    }
}

impl std::fmt::Debug for PoiIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoiIndex")
            .field("poi_count", &self.pois.len())
            .finish()
    }
}

/// Project a surface location onto Earth-centered 3D coordinates in
/// kilometers.
fn to_coords(point: &GeoPoint) -> [f32; 3] {
    let lat = point.lat.to_radians();
    let lon = point.lon.to_radians();
    [
        (EARTH_RADIUS_KM * lat.cos() * lon.cos()) as f32,
        (EARTH_RADIUS_KM * lat.cos() * lon.sin()) as f32,
        (EARTH_RADIUS_KM * lat.sin()) as f32,
    ]
}

/// Chord length through the Earth for a great-circle arc.
///
/// Arcs of half the circumference or more reach every point on the sphere,
/// so the chord is capped at the diameter.
fn chord_length_km(arc_km: f64) -> f64 {
    let half_angle = (arc_km / (2.0 * EARTH_RADIUS_KM)).min(std::f64::consts::FRAC_PI_2);
    2.0 * EARTH_RADIUS_KM * half_angle.sin()
}
