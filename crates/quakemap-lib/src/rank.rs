//! Magnitude ranking of earthquake events.

use crate::error::Result;
use crate::event::EarthquakeEvent;

/// Order events by descending magnitude.
///
/// The sort is stable: events with equal magnitudes keep their input order,
/// so repeated runs over the same slice produce identical rankings.
/// Magnitude and depth are validated first so a NaN or otherwise invalid
/// value is a data-integrity error instead of an inconsistent ordering.
pub fn rank_events(events: &[EarthquakeEvent]) -> Result<Vec<&EarthquakeEvent>> {
    for event in events {
        event.validate()?;
    }

    let mut ranked: Vec<&EarthquakeEvent> = events.iter().collect();
    ranked.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    Ok(ranked)
}

/// The `limit` strongest events, descending. Returns every event when the
/// catalog holds fewer than `limit`.
pub fn top_events(events: &[EarthquakeEvent], limit: usize) -> Result<Vec<&EarthquakeEvent>> {
    let mut ranked = rank_events(events)?;
    ranked.truncate(limit);
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::AgeCategory;
    use crate::geo::GeoPoint;
    use crate::Error;

    fn event(title: &str, magnitude: f64) -> EarthquakeEvent {
        EarthquakeEvent::new(
            title,
            GeoPoint::new(0.0, 0.0),
            magnitude,
            10.0,
            AgeCategory::PastDay,
        )
    }

    #[test]
    fn test_sorts_descending_with_stable_ties() {
        let events = vec![
            event("first-five", 5.0),
            event("three", 3.0),
            event("four", 4.0),
            event("second-five", 5.0),
        ];

        let ranked = rank_events(&events).unwrap();
        let titles: Vec<&str> = ranked.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["first-five", "second-five", "four", "three"]);
    }

    #[test]
    fn test_ranking_is_non_increasing() {
        let events = vec![
            event("a", 2.2),
            event("b", 6.1),
            event("c", 4.4),
            event("d", 6.1),
            event("e", 0.0),
        ];
        let ranked = rank_events(&events).unwrap();
        for pair in ranked.windows(2) {
            assert!(pair[0].magnitude >= pair[1].magnitude);
        }
    }

    #[test]
    fn test_input_slice_is_untouched() {
        let events = vec![event("a", 1.0), event("b", 9.0)];
        let _ = rank_events(&events).unwrap();
        assert_eq!(events[0].title, "a");
        assert_eq!(events[1].title, "b");
    }

    #[test]
    fn test_nan_magnitude_is_an_error() {
        let events = vec![event("good", 5.0), event("bad", f64::NAN)];
        let err = rank_events(&events).unwrap_err();
        assert!(matches!(err, Error::InvalidMagnitude { .. }));
    }

    #[test]
    fn test_top_truncates() {
        let events = vec![event("a", 1.0), event("b", 3.0), event("c", 2.0)];
        let top = top_events(&events, 2).unwrap();
        let titles: Vec<&str> = top.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "c"]);
    }

    #[test]
    fn test_top_with_large_limit_returns_all() {
        let events = vec![event("a", 1.0)];
        assert_eq!(top_events(&events, 10).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_events(&[]).unwrap().is_empty());
        assert!(top_events(&[], 5).unwrap().is_empty());
    }
}
