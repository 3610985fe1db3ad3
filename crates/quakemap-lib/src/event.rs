//! Earthquake events and the fields derived from their feed attributes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geo::GeoPoint;

/// Scale factor from magnitude to the marker display radius.
pub const DISPLAY_RADIUS_SCALE: f64 = 1.75;

/// Magnitude at or above which an event counts as light.
pub const MAG_LIGHT: f64 = 4.0;

/// Magnitude at or above which an event counts as moderate.
pub const MAG_MODERATE: f64 = 5.0;

/// Depth at or above which an event moves from shallow to intermediate, in
/// kilometers.
pub const DEPTH_INTERMEDIATE_KM: f64 = 70.0;

/// Depth at or above which an event counts as deep, in kilometers.
pub const DEPTH_DEEP_KM: f64 = 300.0;

/// Feed age bucket assigned to an event when its feed was ingested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeCategory {
    PastHour,
    PastDay,
    PastWeek,
    Older,
}

impl AgeCategory {
    /// True for events recent enough to deserve extra attention.
    pub fn is_recent(self) -> bool {
        matches!(self, AgeCategory::PastHour | AgeCategory::PastDay)
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AgeCategory::PastHour => "Past Hour",
            AgeCategory::PastDay => "Past Day",
            AgeCategory::PastWeek => "Past Week",
            AgeCategory::Older => "Older",
        };
        f.write_str(label)
    }
}

/// Depth band derived from an event's hypocenter depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthBand {
    Shallow,
    Intermediate,
    Deep,
}

impl DepthBand {
    /// Band for a depth in kilometers.
    pub fn for_depth_km(depth_km: f64) -> Self {
        if depth_km < DEPTH_INTERMEDIATE_KM {
            DepthBand::Shallow
        } else if depth_km < DEPTH_DEEP_KM {
            DepthBand::Intermediate
        } else {
            DepthBand::Deep
        }
    }
}

impl fmt::Display for DepthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DepthBand::Shallow => "shallow",
            DepthBand::Intermediate => "intermediate",
            DepthBand::Deep => "deep",
        };
        f.write_str(label)
    }
}

/// Magnitude band derived from an event's magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MagnitudeBand {
    Minor,
    Light,
    Moderate,
}

impl MagnitudeBand {
    /// Band for a magnitude value.
    pub fn for_magnitude(magnitude: f64) -> Self {
        if magnitude >= MAG_MODERATE {
            MagnitudeBand::Moderate
        } else if magnitude >= MAG_LIGHT {
            MagnitudeBand::Light
        } else {
            MagnitudeBand::Minor
        }
    }
}

impl fmt::Display for MagnitudeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MagnitudeBand::Minor => "minor",
            MagnitudeBand::Light => "light",
            MagnitudeBand::Moderate => "moderate",
        };
        f.write_str(label)
    }
}

/// Land/ocean classification assigned by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classification {
    /// Epicenter lies inside a known region's polygon set.
    Land { country: String },
    /// Epicenter lies outside every known region.
    Ocean,
}

/// A single earthquake event.
///
/// Events enter the library as already-parsed feed records, get classified
/// exactly once against the region set, and are read-only afterwards. The
/// classification slot is never populated from serialized input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeEvent {
    /// Feed title, e.g. "M 6.1 - Altavia highlands".
    pub title: String,
    /// Epicenter location.
    pub location: GeoPoint,
    /// Moment magnitude.
    pub magnitude: f64,
    /// Hypocenter depth in kilometers.
    pub depth_km: f64,
    /// Feed age bucket.
    pub age: AgeCategory,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    classification: Option<Classification>,
}

impl EarthquakeEvent {
    /// Create an unclassified event.
    pub fn new(
        title: impl Into<String>,
        location: GeoPoint,
        magnitude: f64,
        depth_km: f64,
        age: AgeCategory,
    ) -> Self {
        Self {
            title: title.into(),
            location,
            magnitude,
            depth_km,
            age,
            classification: None,
        }
    }

    /// Validate the safety-relevant numeric fields.
    ///
    /// Magnitude and depth feed the radius and banding math and must be
    /// finite, non-negative numbers; anything else is a data-integrity error.
    pub fn validate(&self) -> Result<()> {
        if !self.magnitude.is_finite() || self.magnitude < 0.0 {
            return Err(Error::InvalidMagnitude {
                title: self.title.clone(),
                value: self.magnitude,
            });
        }
        if !self.depth_km.is_finite() || self.depth_km < 0.0 {
            return Err(Error::InvalidDepth {
                title: self.title.clone(),
                value: self.depth_km,
            });
        }
        Ok(())
    }

    /// The classification assigned by the classifier, if it has run.
    pub fn classification(&self) -> Option<&Classification> {
        self.classification.as_ref()
    }

    /// True when the classifier placed this event inside a known region.
    pub fn is_on_land(&self) -> bool {
        matches!(self.classification, Some(Classification::Land { .. }))
    }

    /// Owning country name when the event was classified as on land.
    pub fn country(&self) -> Option<&str> {
        match &self.classification {
            Some(Classification::Land { country }) => Some(country.as_str()),
            _ => None,
        }
    }

    /// Marker radius at display scale, proportional to magnitude.
    ///
    /// This is a rendering quantity only; threat reach is governed by
    /// [`threat_radius_km`](crate::threat::threat_radius_km).
    pub fn display_radius(&self) -> f64 {
        DISPLAY_RADIUS_SCALE * self.magnitude
    }

    /// Depth band for this event.
    pub fn depth_band(&self) -> DepthBand {
        DepthBand::for_depth_km(self.depth_km)
    }

    /// Magnitude band for this event.
    pub fn magnitude_band(&self) -> MagnitudeBand {
        MagnitudeBand::for_magnitude(self.magnitude)
    }

    pub(crate) fn set_classification(&mut self, classification: Classification) {
        self.classification = Some(classification);
    }
}

impl fmt::Display for EarthquakeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(magnitude: f64, depth_km: f64) -> EarthquakeEvent {
        EarthquakeEvent::new(
            "M test",
            GeoPoint::new(0.0, 0.0),
            magnitude,
            depth_km,
            AgeCategory::PastDay,
        )
    }

    #[test]
    fn test_depth_bands_use_thresholds() {
        assert_eq!(DepthBand::for_depth_km(0.0), DepthBand::Shallow);
        assert_eq!(DepthBand::for_depth_km(69.9), DepthBand::Shallow);
        assert_eq!(DepthBand::for_depth_km(70.0), DepthBand::Intermediate);
        assert_eq!(DepthBand::for_depth_km(299.9), DepthBand::Intermediate);
        assert_eq!(DepthBand::for_depth_km(300.0), DepthBand::Deep);
    }

    #[test]
    fn test_magnitude_bands_use_thresholds() {
        assert_eq!(MagnitudeBand::for_magnitude(3.9), MagnitudeBand::Minor);
        assert_eq!(MagnitudeBand::for_magnitude(4.0), MagnitudeBand::Light);
        assert_eq!(MagnitudeBand::for_magnitude(4.9), MagnitudeBand::Light);
        assert_eq!(MagnitudeBand::for_magnitude(5.0), MagnitudeBand::Moderate);
    }

    #[test]
    fn test_display_radius_scales_with_magnitude() {
        assert_eq!(event(4.0, 10.0).display_radius(), 7.0);
        assert_eq!(event(0.0, 10.0).display_radius(), 0.0);
    }

    #[test]
    fn test_recent_ages() {
        assert!(AgeCategory::PastHour.is_recent());
        assert!(AgeCategory::PastDay.is_recent());
        assert!(!AgeCategory::PastWeek.is_recent());
        assert!(!AgeCategory::Older.is_recent());
    }

    #[test]
    fn test_validate_rejects_nan_magnitude() {
        let err = event(f64::NAN, 10.0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidMagnitude { .. }));
    }

    #[test]
    fn test_validate_rejects_negative_depth() {
        let err = event(5.0, -1.0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidDepth { .. }));
    }

    #[test]
    fn test_events_deserialize_unclassified() {
        let raw = r#"{
            "title": "M 5.0 - Somewhere",
            "location": { "lat": 10.0, "lon": 20.0 },
            "magnitude": 5.0,
            "depth_km": 33.0,
            "age": "past_week"
        }"#;
        let event: EarthquakeEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(event.age, AgeCategory::PastWeek);
        assert!(event.classification().is_none());
        assert!(!event.is_on_land());
    }
}
