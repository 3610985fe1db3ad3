//! Output formatting for command results.
//!
//! Every command renders either human-friendly text or pretty-printed JSON;
//! the JSON payloads are the canonical shapes for scripting against the CLI.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use quakemap_lib::{
    threat_radius_km, ClassificationReport, EarthquakeEvent, PointOfInterest, ThreatReveal,
};

/// Output format selection for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly plain text.
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Print the classification summary: per-region counts in name order,
/// followed by the ocean remainder.
pub fn print_report(report: &ClassificationReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            for (region, count) in &report.land_counts {
                println!("{}: {}", region, count);
            }
            println!("OCEAN QUAKES: {}", report.ocean_count);
        }
    }
    Ok(())
}

/// Print ranked events, strongest first.
pub fn print_ranked(events: &[&EarthquakeEvent], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(events)?),
        OutputFormat::Text => {
            for (position, event) in events.iter().enumerate() {
                println!(
                    "{:>3}. {} (magnitude {:.1}, {} depth, {})",
                    position + 1,
                    event.title,
                    event.magnitude,
                    event.depth_band(),
                    event.age
                );
            }
        }
    }
    Ok(())
}

/// Markers revealed for a selected earthquake.
#[derive(Debug, Clone, Serialize)]
struct QuakeThreatOutput<'a> {
    /// The selected event's title.
    title: &'a str,
    /// The selected event's magnitude.
    magnitude: f64,
    /// Threat radius in kilometers.
    radius_km: f64,
    /// Number of cities inside the radius.
    city_count: usize,
    /// Number of airports inside the radius.
    airport_count: usize,
    /// Cities inside the radius, nearest first.
    cities: Vec<RevealEntry<'a>>,
    /// Airports inside the radius, nearest first.
    airports: Vec<RevealEntry<'a>>,
}

/// A revealed point of interest with its distance from the epicenter.
#[derive(Debug, Clone, Serialize)]
struct RevealEntry<'a> {
    name: &'a str,
    distance_km: f64,
}

/// Print the reveal set for a selected earthquake.
pub fn print_quake_threats(
    event: &EarthquakeEvent,
    reveal: &ThreatReveal<'_>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let payload = QuakeThreatOutput {
                title: &event.title,
                magnitude: event.magnitude,
                radius_km: reveal.radius_km,
                city_count: reveal.cities.len(),
                airport_count: reveal.airports.len(),
                cities: reveal_entries(&reveal.cities),
                airports: reveal_entries(&reveal.airports),
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Text => {
            println!(
                "Threat radius for {}: {:.1} km",
                event.title, reveal.radius_km
            );
            println!("Cities within reach ({} found):", reveal.cities.len());
            for (poi, distance) in &reveal.cities {
                println!(" - {} ({:.1} km)", poi.name, distance);
            }
            println!("Airports within reach ({} found):", reveal.airports.len());
            for (poi, distance) in &reveal.airports {
                println!(" - {} ({:.1} km)", poi.name, distance);
            }
        }
    }
    Ok(())
}

fn reveal_entries<'a>(pairs: &[(&'a PointOfInterest, f64)]) -> Vec<RevealEntry<'a>> {
    pairs
        .iter()
        .map(|(poi, distance)| RevealEntry {
            name: poi.name.as_str(),
            distance_km: *distance,
        })
        .collect()
}

/// Earthquakes threatening a selected city.
#[derive(Debug, Clone, Serialize)]
struct CityThreatOutput<'a> {
    /// The selected city's name.
    city: &'a str,
    /// Number of threatening events.
    count: usize,
    /// Threatening events, nearest first.
    quakes: Vec<ThreatEntry<'a>>,
}

/// A threatening event with its distance and reach.
#[derive(Debug, Clone, Serialize)]
struct ThreatEntry<'a> {
    title: &'a str,
    magnitude: f64,
    distance_km: f64,
    radius_km: f64,
}

/// Print the earthquakes whose threat radius covers a city.
pub fn print_city_threats(
    city: &PointOfInterest,
    threats: &[(&EarthquakeEvent, f64)],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let payload = CityThreatOutput {
                city: &city.name,
                count: threats.len(),
                quakes: threats
                    .iter()
                    .map(|(event, distance)| ThreatEntry {
                        title: &event.title,
                        magnitude: event.magnitude,
                        distance_km: *distance,
                        radius_km: threat_radius_km(event.magnitude),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Text => {
            println!(
                "Earthquakes threatening {} ({} found):",
                city.name,
                threats.len()
            );
            for (event, distance) in threats {
                println!(
                    " - {} ({:.1} km away, reach {:.1} km)",
                    event.title,
                    distance,
                    threat_radius_km(event.magnitude)
                );
            }
        }
    }
    Ok(())
}
