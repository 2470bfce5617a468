//! Proximity search over points of interest.
//!
//! Given an origin, a radius in miles and an optional category filter, finds
//! the candidates in range and ranks them nearest first. This is a pure
//! function of its inputs: candidate sets are borrowed, never modified, so
//! one set can serve any number of concurrent queries.

mod rank;
mod search;


pub use rank::rank_by_distance;
pub use search::{Candidate, Query, Ranked, SearchError, matches_category, search};
