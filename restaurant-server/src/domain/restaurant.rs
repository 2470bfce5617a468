//! Restaurant records, the points of interest we search over.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::GeoPoint;

/// Stable identifier of a restaurant, unique within a candidate set.
///
/// Accepts a JSON string or integer; integers are kept as their decimal
/// string, so `1` and `"1"` are the same id. Always serializes as a string.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RestaurantId(String);

impl RestaurantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RestaurantId({})", self.0)
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RestaurantId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = RestaurantId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(RestaurantId::new(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(RestaurantId(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(RestaurantId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(RestaurantId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Descriptive attributes of a restaurant.
///
/// Proximity search never reads these; they ride along to the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDetails {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Review score out of 5
    #[serde(default)]
    pub rating: Option<f64>,
}

/// A restaurant at a fixed location.
///
/// Serialized flat: `{ id, name, address, phone, rating, latitude, longitude, cuisine }`.
/// A `distance` field on input is ignored; distance belongs to a query
/// result, not to the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    #[serde(flatten)]
    pub details: RestaurantDetails,
    #[serde(flatten)]
    pub location: GeoPoint,
    /// Free-text cuisine label, e.g. "Seafood" or "Vegan/Vegetarian". May be empty.
    #[serde(default)]
    pub cuisine: String,
}

impl Restaurant {
    pub fn new(
        id: impl Into<String>,
        location: GeoPoint,
        cuisine: impl Into<String>,
        details: RestaurantDetails,
    ) -> Self {
        Self {
            id: RestaurantId::new(id),
            details,
            location,
            cuisine: cuisine.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walrus() -> Restaurant {
        Restaurant::new(
            "1",
            GeoPoint::new(47.6068, -122.3350),
            "Seafood",
            RestaurantDetails {
                name: "The Walrus and the Carpenter".to_string(),
                address: "1427 Post Alley, Seattle, WA 98101".to_string(),
                phone: Some("(206) 398-4000".to_string()),
                rating: Some(4.5),
            },
        )
    }

    #[test]
    fn serializes_flat() {
        let json = serde_json::to_value(walrus()).unwrap();

        assert_eq!(json["id"], "1");
        assert_eq!(json["name"], "The Walrus and the Carpenter");
        assert_eq!(json["latitude"], 47.6068);
        assert_eq!(json["longitude"], -122.3350);
        assert_eq!(json["cuisine"], "Seafood");
        assert_eq!(json["phone"], "(206) 398-4000");
        assert_eq!(json["rating"], 4.5);
        assert!(json.get("distance").is_none());
    }

    #[test]
    fn deserializes_flat_and_drops_stale_distance() {
        let restaurant: Restaurant = serde_json::from_str(
            r#"{
                "id": "1",
                "name": "The Walrus and the Carpenter",
                "latitude": 47.6068,
                "longitude": -122.3350,
                "address": "1427 Post Alley, Seattle, WA 98101",
                "phone": "(206) 398-4000",
                "cuisine": "Seafood",
                "rating": 4.5,
                "distance": 0.2
            }"#,
        )
        .unwrap();

        assert_eq!(restaurant, walrus());
    }

    #[test]
    fn optional_fields_default() {
        let restaurant: Restaurant = serde_json::from_str(
            r#"{"id": "x", "name": "Nameless Noodles", "latitude": 1.0, "longitude": 2.0}"#,
        )
        .unwrap();

        assert_eq!(restaurant.cuisine, "");
        assert_eq!(restaurant.details.address, "");
        assert!(restaurant.details.phone.is_none());
        assert!(restaurant.details.rating.is_none());
        assert_eq!(restaurant.name(), "Nameless Noodles");
    }

    #[test]
    fn id_accepts_string_or_integer() {
        let from_str: RestaurantId = serde_json::from_str(r#""17""#).unwrap();
        let from_int: RestaurantId = serde_json::from_str("17").unwrap();
        let negative: RestaurantId = serde_json::from_str("-3").unwrap();

        assert_eq!(from_str, from_int);
        assert_eq!(from_int.as_str(), "17");
        assert_eq!(negative.as_str(), "-3");
        assert_eq!(serde_json::to_value(&from_int).unwrap(), "17");

        assert!(serde_json::from_str::<RestaurantId>("1.5").is_err());
        assert!(serde_json::from_str::<RestaurantId>("null").is_err());
    }

    #[test]
    fn integer_id_in_flat_record() {
        let restaurant: Restaurant = serde_json::from_str(
            r#"{"id": 1, "name": "A", "latitude": 47.6, "longitude": -122.3, "cuisine": "Thai"}"#,
        )
        .unwrap();

        assert_eq!(restaurant.id, RestaurantId::new("1"));
    }

    #[test]
    fn id_display() {
        let id = RestaurantId::new("42");
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.as_str(), "42");
        assert_eq!(format!("{:?}", id), "RestaurantId(42)");
    }
}
