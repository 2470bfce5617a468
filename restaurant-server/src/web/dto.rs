//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Restaurant;
use crate::proximity::Ranked;

/// Query string for a restaurant search around a coordinate.
///
/// Values arrive as raw strings so a malformed number can be reported with
/// its parameter name instead of a generic extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct RestaurantSearchRequest {
    /// Latitude of the search origin
    pub lat: Option<String>,

    /// Longitude of the search origin
    pub lng: Option<String>,

    /// Search radius in miles
    pub distance: Option<String>,

    /// Optional cuisine filter (case-insensitive substring)
    pub cuisine: Option<String>,
}

/// Query string for a restaurant search around a station.
#[derive(Debug, Default, Deserialize)]
pub struct StationRestaurantsRequest {
    /// Search radius in miles
    pub distance: Option<String>,

    /// Optional cuisine filter (case-insensitive substring)
    pub cuisine: Option<String>,
}

/// A restaurant in search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantResult {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub phone: Option<String>,
    pub cuisine: String,
    pub rating: Option<f64>,

    /// Miles from the search origin
    pub distance: f64,
}

impl RestaurantResult {
    /// Create from a ranked search result.
    pub fn from_ranked(ranked: &Ranked<'_, Restaurant>) -> Self {
        let r = ranked.candidate;
        Self {
            id: r.id.to_string(),
            name: r.details.name.clone(),
            latitude: r.location.latitude,
            longitude: r.location.longitude,
            address: r.details.address.clone(),
            phone: r.details.phone.clone(),
            cuisine: r.cuisine.clone(),
            rating: r.details.rating,
            distance: ranked.distance_miles,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeoPoint, RestaurantDetails};

    #[test]
    fn result_is_flat_with_distance() {
        let restaurant = Restaurant::new(
            "4",
            GeoPoint::new(47.6090, -122.3320),
            "Italian",
            RestaurantDetails {
                name: "Spinasse".to_string(),
                address: "719 Pine St, Seattle, WA 98101".to_string(),
                phone: None,
                rating: Some(4.4),
            },
        );
        let ranked = Ranked {
            candidate: &restaurant,
            distance_miles: 0.19,
        };

        let json = serde_json::to_value(RestaurantResult::from_ranked(&ranked)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "4",
                "name": "Spinasse",
                "latitude": 47.6090,
                "longitude": -122.3320,
                "address": "719 Pine St, Seattle, WA 98101",
                "phone": null,
                "cuisine": "Italian",
                "rating": 4.4,
                "distance": 0.19,
            })
        );
    }

    #[test]
    fn request_fields_are_optional() {
        let req: RestaurantSearchRequest = serde_json::from_str("{}").unwrap();
        assert!(req.lat.is_none());
        assert!(req.cuisine.is_none());

        let req: StationRestaurantsRequest =
            serde_json::from_str(r#"{"distance": "0.5"}"#).unwrap();
        assert_eq!(req.distance.as_deref(), Some("0.5"));
    }
}
