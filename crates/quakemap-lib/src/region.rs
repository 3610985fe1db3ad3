//! Country regions and the containment index built over them.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::geo::{BoundingBox, GeoPoint, Ring};

/// A named region made of one or more polygon rings.
///
/// Composite regions (one name spread over several disjoint outlines, e.g. an
/// archipelago) carry every outline in `rings`; containment is the logical OR
/// over them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Region name, unique within a catalog.
    pub name: String,
    /// Polygon rings outlining the region.
    pub rings: Vec<Ring>,
}

impl Region {
    /// Create a region from its name and outlines.
    pub fn new(name: impl Into<String>, rings: Vec<Ring>) -> Self {
        Self {
            name: name.into(),
            rings,
        }
    }
}

/// Containment index over a fixed set of regions.
///
/// Built once when the catalog is loaded; queries are read-only so the index
/// can be shared freely afterwards. Each ring gets a precomputed bounding box
/// so most regions are rejected without running the full ray-casting test.
#[derive(Debug, Clone)]
pub struct RegionIndex {
    regions: Vec<IndexedRegion>,
}

#[derive(Debug, Clone)]
struct IndexedRegion {
    region: Region,
    // One box per ring, same order as region.rings.
    boxes: Vec<BoundingBox>,
}

impl RegionIndex {
    /// Validate the region set and precompute per-ring bounding boxes.
    ///
    /// Rings with fewer than three vertices or with non-finite vertices are
    /// data-integrity errors and fail the build. A region with zero rings is
    /// legal; it can never contain a point and is reported as a data-quality
    /// warning.
    pub fn build(regions: Vec<Region>) -> Result<Self> {
        let mut indexed = Vec::with_capacity(regions.len());
        for region in regions {
            if region.rings.is_empty() {
                warn!(
                    region = %region.name,
                    "region has no rings and can never contain an event"
                );
            }
            let mut boxes = Vec::with_capacity(region.rings.len());
            for ring in &region.rings {
                if ring.vertices().len() < 3 {
                    return Err(Error::DegenerateRing {
                        region: region.name.clone(),
                        vertices: ring.vertices().len(),
                    });
                }
                if ring.vertices().iter().any(|v| !v.is_finite()) {
                    return Err(Error::NonFiniteVertex {
                        region: region.name.clone(),
                    });
                }
                let bounds = ring
                    .bounding_box()
                    .expect("ring validated to have vertices");
                boxes.push(bounds);
            }
            indexed.push(IndexedRegion { region, boxes });
        }

        debug!(region_count = indexed.len(), "built region index");
        Ok(Self { regions: indexed })
    }

    /// Number of indexed regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns true if the index holds no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iterate the regions in insertion order.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter().map(|entry| &entry.region)
    }

    /// Find the region containing `point`, if any.
    ///
    /// Regions are tested in insertion order and the first hit wins; within a
    /// composite region the rings short-circuit on the first containing ring.
    /// For a fixed region set the answer is fully deterministic, including
    /// for points in areas covered by overlapping outlines.
    pub fn classify(&self, point: &GeoPoint) -> Option<&Region> {
        self.regions.iter().find_map(|entry| {
            let hit = entry
                .boxes
                .iter()
                .zip(&entry.region.rings)
                .any(|(bounds, ring)| bounds.contains(point) && ring.contains(point));
            hit.then_some(&entry.region)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Ring {
        Ring::new(vec![
            GeoPoint::new(min_lat, min_lon),
            GeoPoint::new(min_lat, max_lon),
            GeoPoint::new(max_lat, max_lon),
            GeoPoint::new(max_lat, min_lon),
        ])
    }

    #[test]
    fn test_build_rejects_degenerate_ring() {
        let regions = vec![Region::new(
            "Linia",
            vec![Ring::new(vec![
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(1.0, 1.0),
            ])],
        )];
        let err = RegionIndex::build(regions).unwrap_err();
        assert!(matches!(
            err,
            Error::DegenerateRing { vertices: 2, .. }
        ));
    }

    #[test]
    fn test_build_rejects_non_finite_vertex() {
        let regions = vec![Region::new(
            "Nanland",
            vec![Ring::new(vec![
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(0.0, f64::NAN),
                GeoPoint::new(1.0, 1.0),
            ])],
        )];
        let err = RegionIndex::build(regions).unwrap_err();
        assert!(matches!(err, Error::NonFiniteVertex { .. }));
    }

    #[test]
    fn test_zero_ring_region_contains_nothing() {
        let index = RegionIndex::build(vec![Region::new("Ghost", Vec::new())]).unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.classify(&GeoPoint::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_classify_picks_containing_region() {
        let index = RegionIndex::build(vec![
            Region::new("West", vec![rect(0.0, 0.0, 10.0, 10.0)]),
            Region::new("East", vec![rect(0.0, 20.0, 10.0, 30.0)]),
        ])
        .unwrap();

        assert_eq!(
            index.classify(&GeoPoint::new(5.0, 5.0)).map(|r| r.name.as_str()),
            Some("West")
        );
        assert_eq!(
            index.classify(&GeoPoint::new(5.0, 25.0)).map(|r| r.name.as_str()),
            Some("East")
        );
        assert!(index.classify(&GeoPoint::new(5.0, 15.0)).is_none());
    }

    #[test]
    fn test_composite_region_is_union_of_rings() {
        let index = RegionIndex::build(vec![Region::new(
            "Isles",
            vec![rect(0.0, 0.0, 5.0, 5.0), rect(20.0, 20.0, 25.0, 25.0)],
        )])
        .unwrap();

        assert!(index.classify(&GeoPoint::new(2.0, 2.0)).is_some());
        assert!(index.classify(&GeoPoint::new(22.0, 22.0)).is_some());
        assert!(index.classify(&GeoPoint::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn test_overlapping_regions_resolve_by_insertion_order() {
        let index = RegionIndex::build(vec![
            Region::new("First", vec![rect(0.0, 0.0, 10.0, 10.0)]),
            Region::new("Second", vec![rect(0.0, 0.0, 10.0, 10.0)]),
        ])
        .unwrap();

        let p = GeoPoint::new(5.0, 5.0);
        for _ in 0..10 {
            assert_eq!(index.classify(&p).map(|r| r.name.as_str()), Some("First"));
        }
    }

    #[test]
    fn test_regions_iterate_in_insertion_order() {
        let index = RegionIndex::build(vec![
            Region::new("West", vec![rect(0.0, 0.0, 10.0, 10.0)]),
            Region::new("East", vec![rect(0.0, 20.0, 10.0, 30.0)]),
        ])
        .unwrap();

        let names: Vec<&str> = index.regions().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["West", "East"]);
    }
}
