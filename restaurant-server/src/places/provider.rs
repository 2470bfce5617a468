//! Candidate providers.

use std::collections::HashSet;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use crate::domain::{GeoPoint, Restaurant};

use super::error::PlacesError;
use super::seed::seattle_restaurants;

/// Source of candidate restaurants for an area.
///
/// Implementations may return more than the area asked for; proximity
/// search does the exact filtering. The returned set is shared and must be
/// treated as read-only.
pub trait PlacesProvider: Send + Sync {
    /// Candidates near `origin`, covering at least `radius_miles`.
    fn nearby(
        &self,
        origin: GeoPoint,
        radius_miles: f64,
    ) -> impl Future<Output = Result<Arc<[Restaurant]>, PlacesError>> + Send;
}

/// A fixed, in-memory candidate set loaded once at startup.
///
/// Answers every area request with the whole set.
#[derive(Debug, Clone)]
pub struct StaticPlaces {
    restaurants: Arc<[Restaurant]>,
}

impl StaticPlaces {
    /// Wrap a candidate set, rejecting duplicate ids.
    pub fn new(restaurants: Vec<Restaurant>) -> Result<Self, PlacesError> {
        let mut seen = HashSet::with_capacity(restaurants.len());
        for r in &restaurants {
            if !seen.insert(&r.id) {
                return Err(PlacesError::DuplicateId(r.id.clone()));
            }
        }

        Ok(Self {
            restaurants: restaurants.into(),
        })
    }

    /// The built-in downtown Seattle set.
    pub fn seattle() -> Self {
        Self {
            restaurants: seattle_restaurants().into(),
        }
    }

    /// Load a JSON array of restaurant records from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PlacesError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|source| PlacesError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let restaurants: Vec<Restaurant> =
            serde_json::from_str(&json).map_err(|source| PlacesError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        Self::new(restaurants)
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }
}

impl PlacesProvider for StaticPlaces {
    async fn nearby(
        &self,
        _origin: GeoPoint,
        _radius_miles: f64,
    ) -> Result<Arc<[Restaurant]>, PlacesError> {
        Ok(Arc::clone(&self.restaurants))
    }
}
