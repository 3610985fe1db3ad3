use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the quakemap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Catalog could not be located at the resolved path.
    #[error("catalog not found at {path}")]
    CatalogNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for catalog storage")]
    ProjectDirsUnavailable,

    /// Raised when an event carries a magnitude that is not a finite,
    /// non-negative number.
    #[error("invalid magnitude {value} for event '{title}'")]
    InvalidMagnitude { title: String, value: f64 },

    /// Raised when an event carries a depth that is not a finite,
    /// non-negative number.
    #[error("invalid depth {value} km for event '{title}'")]
    InvalidDepth { title: String, value: f64 },

    /// Raised when a region polygon ring has too few vertices to bound an
    /// area.
    #[error("region '{region}' has a ring with {vertices} vertices; at least 3 are required")]
    DegenerateRing { region: String, vertices: usize },

    /// Raised when a region polygon ring contains a vertex with non-finite
    /// coordinates.
    #[error("region '{region}' has a ring vertex with non-finite coordinates")]
    NonFiniteVertex { region: String },

    /// Raised when an earthquake title could not be found in the catalog.
    #[error("unknown earthquake: {title}{}", format_suggestions(.suggestions))]
    UnknownEvent {
        title: String,
        suggestions: Vec<String>,
    },

    /// Raised when a city name could not be found in the catalog.
    #[error("unknown city: {name}{}", format_suggestions(.suggestions))]
    UnknownCity {
        name: String,
        suggestions: Vec<String>,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
