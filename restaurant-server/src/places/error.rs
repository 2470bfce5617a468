//! Places data source error types.

use std::path::PathBuf;

use crate::domain::RestaurantId;

/// Errors that can occur when loading or querying candidate restaurants.
#[derive(Debug, thiserror::Error)]
pub enum PlacesError {
    /// Candidate file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Candidate file is not a JSON array of restaurants
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two candidates share an id
    #[error("duplicate restaurant id: {0}")]
    DuplicateId(RestaurantId),

    /// Upstream lookup failed
    #[error("places lookup failed: {message}")]
    Lookup { message: String },
}
