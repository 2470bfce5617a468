//! Built-in candidate set: downtown Seattle restaurants.

use crate::domain::{GeoPoint, Restaurant, RestaurantDetails};

/// The seven downtown Seattle restaurants served when no candidate file is
/// configured.
pub fn seattle_restaurants() -> Vec<Restaurant> {
    vec![
        restaurant(
            "1",
            "The Walrus and the Carpenter",
            (47.6068, -122.3350),
            "1427 Post Alley, Seattle, WA 98101",
            "(206) 398-4000",
            "Seafood",
            4.5,
        ),
        restaurant(
            "2",
            "Biscuit Beignes",
            (47.6070, -122.3380),
            "1530 Melrose Ave E, Seattle, WA 98122",
            "(206) 323-0350",
            "American",
            4.3,
        ),
        restaurant(
            "3",
            "Taneda Sushi",
            (47.6200, -122.3215),
            "609 Pine St, Seattle, WA 98101",
            "(206) 621-1950",
            "Asian",
            4.6,
        ),
        restaurant(
            "4",
            "Spinasse",
            (47.6090, -122.3320),
            "719 Pine St, Seattle, WA 98101",
            "(206) 624-6066",
            "Italian",
            4.4,
        ),
        restaurant(
            "5",
            "Foundation",
            (47.6050, -122.3290),
            "117 S Main St, Seattle, WA 98104",
            "(206) 682-0541",
            "American",
            4.2,
        ),
        restaurant(
            "6",
            "Vegetarian Thai",
            (47.6150, -122.3280),
            "101 Pike Pl, Seattle, WA 98101",
            "(206) 448-7515",
            "Vegan/Vegetarian",
            4.1,
        ),
        restaurant(
            "7",
            "Café Vita",
            (47.6080, -122.3365),
            "813 5th Ave S, Seattle, WA 98134",
            "(206) 329-2829",
            "Cafe/Coffee",
            4.0,
        ),
    ]
}

fn restaurant(
    id: &str,
    name: &str,
    (latitude, longitude): (f64, f64),
    address: &str,
    phone: &str,
    cuisine: &str,
    rating: f64,
) -> Restaurant {
    Restaurant::new(
        id,
        GeoPoint::new(latitude, longitude),
        cuisine,
        RestaurantDetails {
            name: name.to_string(),
            address: address.to_string(),
            phone: Some(phone.to_string()),
            rating: Some(rating),
        },
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn seven_restaurants_with_unique_ids() {
        let restaurants = seattle_restaurants();
        assert_eq!(restaurants.len(), 7);

        let ids: HashSet<_> = restaurants.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn all_in_seattle() {
        let downtown = GeoPoint::new(47.6062, -122.3321);
        for r in seattle_restaurants() {
            assert!(r.location.is_valid());
            assert!(downtown.distance_miles(&r.location) < 2.0, "{}", r.name());
        }
    }
}
