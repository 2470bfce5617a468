//! Caching layer for places lookups.
//!
//! A live places provider is slow and rate limited, while the web frontend
//! asks for the same handful of station areas over and over. Responses are
//! cached per exact `(origin, radius)` so a hit is always the answer to the
//! same question; the cached value is the shared candidate set itself.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::{GeoPoint, Restaurant};

use super::error::PlacesError;
use super::provider::PlacesProvider;

/// Cache key: bit patterns of (latitude, longitude, radius).
type AreaKey = (u64, u64, u64);

/// Configuration for the places cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 1000,
        }
    }
}

/// Places provider with caching.
///
/// Wraps any [`PlacesProvider`] and caches its responses. Failed lookups are
/// not cached.
pub struct CachedPlaces<P> {
    provider: P,
    areas: MokaCache<AreaKey, Arc<[Restaurant]>>,
}

impl<P: PlacesProvider> CachedPlaces<P> {
    /// Create a new cached provider.
    pub fn new(provider: P, config: &CacheConfig) -> Self {
        let areas = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { provider, areas }
    }

    /// The wrapped provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.areas.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.areas.invalidate_all();
    }

    fn key(origin: GeoPoint, radius_miles: f64) -> AreaKey {
        (
            origin.latitude.to_bits(),
            origin.longitude.to_bits(),
            radius_miles.to_bits(),
        )
    }
}

impl<P: PlacesProvider> PlacesProvider for CachedPlaces<P> {
    async fn nearby(
        &self,
        origin: GeoPoint,
        radius_miles: f64,
    ) -> Result<Arc<[Restaurant]>, PlacesError> {
        let key = Self::key(origin, radius_miles);

        if let Some(cached) = self.areas.get(&key).await {
            return Ok(cached);
        }

        debug!(%origin, radius_miles, "places cache miss");
        let fresh = self.provider.nearby(origin, radius_miles).await?;
        self.areas.insert(key, Arc::clone(&fresh)).await;

        Ok(fresh)
    }
}
