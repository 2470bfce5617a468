//! Application state for the web layer.

use std::sync::Arc;

use crate::places::{CachedPlaces, StaticPlaces};
use crate::stations::StationRegistry;

/// Shared application state.
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Stations users can search around
    pub stations: Arc<StationRegistry>,

    /// Cached candidate restaurants
    pub places: Arc<CachedPlaces<StaticPlaces>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(stations: StationRegistry, places: CachedPlaces<StaticPlaces>) -> Self {
        Self {
            stations: Arc::new(stations),
            places: Arc::new(places),
        }
    }
}
