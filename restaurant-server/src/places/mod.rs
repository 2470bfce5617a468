//! Candidate restaurants for proximity search.
//!
//! A [`PlacesProvider`] answers "which restaurants are around here?" with a
//! shared, read-only candidate set. The built-in provider is a fixed list
//! loaded once at startup, either the bundled Seattle data or a JSON file;
//! [`CachedPlaces`] sits in front of any provider.

mod cache;
mod error;
mod provider;
mod seed;

pub use cache::{CacheConfig, CachedPlaces};
pub use error::PlacesError;
pub use provider::{PlacesProvider, StaticPlaces};
pub use seed::seattle_restaurants;
