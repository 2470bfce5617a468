//! Radius filtering and distance ranking.

use tracing::debug;

use crate::domain::{GeoPoint, Restaurant};

use super::rank::rank_by_distance;

/// Error from proximity search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// The query itself is malformed, as opposed to matching nothing
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Anything that can be located and classified for proximity search.
///
/// The search reads nothing else from a candidate; all other attributes are
/// carried through untouched.
pub trait Candidate {
    /// Where the candidate is.
    fn location(&self) -> GeoPoint;

    /// Free-text classification, matched against the category filter.
    fn category(&self) -> &str;
}

impl Candidate for Restaurant {
    fn location(&self) -> GeoPoint {
        self.location
    }

    fn category(&self) -> &str {
        &self.cuisine
    }
}

/// A proximity query: everything within `radius_miles` of `origin`,
/// optionally restricted to a category.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub origin: GeoPoint,

    /// Search radius in miles. Inclusive.
    pub radius_miles: f64,

    /// Case-insensitive substring matched against each candidate's category.
    /// Never `Some("")`.
    pub category_filter: Option<String>,
}

impl Query {
    /// Create a query with no category restriction.
    pub fn new(origin: GeoPoint, radius_miles: f64) -> Self {
        Self {
            origin,
            radius_miles,
            category_filter: None,
        }
    }

    /// Restrict results to categories containing `category`.
    ///
    /// An empty string leaves the query unrestricted.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category_filter = (!category.is_empty()).then_some(category);
        self
    }

    /// Check the query is well-formed.
    ///
    /// The radius must be strictly positive. Coordinates are not checked.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.radius_miles.is_nan() || self.radius_miles <= 0.0 {
            return Err(SearchError::InvalidArgument(format!(
                "radius must be greater than zero, got {}",
                self.radius_miles
            )));
        }
        Ok(())
    }
}

/// A candidate within range, paired with its distance from the query origin.
///
/// The distance only means something relative to the query that produced it.
#[derive(Debug, Clone)]
pub struct Ranked<'a, C> {
    pub candidate: &'a C,
    pub distance_miles: f64,
}

/// Case-insensitive substring match of `filter` against `category`.
pub fn matches_category(category: &str, filter: &str) -> bool {
    category.to_lowercase().contains(&filter.to_lowercase())
}

/// Find every candidate within the query radius, nearest first.
///
/// Candidates exactly `radius_miles` away are included; candidates whose
/// distance cannot be computed (non-finite coordinates) never are. Equal distances keep
/// their order from `candidates`. The candidate slice is only read; each
/// result borrows its candidate and carries a freshly computed distance.
///
/// Returns [`SearchError::InvalidArgument`] if the radius is not positive,
/// regardless of the candidates. No candidates, or none in range, is an
/// empty result rather than an error.
pub fn search<'a, C: Candidate>(
    query: &Query,
    candidates: &'a [C],
) -> Result<Vec<Ranked<'a, C>>, SearchError> {
    query.validate()?;

    let in_range: Vec<Ranked<'a, C>> = candidates
        .iter()
        .filter_map(|candidate| {
            let distance_miles = query.origin.distance_miles(&candidate.location());
            // A NaN distance from non-finite coordinates fails this and drops out
            (distance_miles <= query.radius_miles).then_some(Ranked {
                candidate,
                distance_miles,
            })
        })
        .filter(|ranked| {
            query
                .category_filter
                .as_deref()
                .is_none_or(|f| matches_category(ranked.candidate.category(), f))
        })
        .collect();

    debug!(
        origin = %query.origin,
        radius_miles = query.radius_miles,
        category = query.category_filter.as_deref().unwrap_or(""),
        scanned = candidates.len(),
        retained = in_range.len(),
        "proximity search"
    );

    Ok(rank_by_distance(in_range))
}
