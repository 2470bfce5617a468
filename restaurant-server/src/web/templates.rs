//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Station;

/// Smallest radius offered by the distance slider, in miles.
pub const MIN_DISTANCE_MILES: f64 = 0.1;

/// Largest radius offered by the distance slider, in miles.
pub const MAX_DISTANCE_MILES: f64 = 2.0;

/// Initial slider position, in miles.
pub const DEFAULT_DISTANCE_MILES: f64 = 0.5;

/// Home page: station picker, distance slider, cuisine filter and map.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub stations: Vec<StationOption>,
    pub min_distance: f64,
    pub max_distance: f64,
    pub default_distance: f64,
}

impl IndexTemplate {
    pub fn new(stations: &[Station]) -> Self {
        Self {
            stations: stations.iter().map(StationOption::from_station).collect(),
            min_distance: MIN_DISTANCE_MILES,
            max_distance: MAX_DISTANCE_MILES,
            default_distance: DEFAULT_DISTANCE_MILES,
        }
    }
}

/// One entry in the station picker.
#[derive(Debug, Clone)]
pub struct StationOption {
    pub id: u32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl StationOption {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.get(),
            name: station.name.clone(),
            latitude: station.location.latitude,
            longitude: station.location.longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stations::sound_transit_link;

    #[test]
    fn index_lists_every_station() {
        let registry = sound_transit_link().unwrap();
        let html = IndexTemplate::new(registry.list()).render().unwrap();

        assert_eq!(html.matches("<option value=").count(), registry.len() + 1);
        assert!(html.contains("Northgate Station"));
        assert!(html.contains("Capitol Hill Station"));
        assert!(html.contains(r#"value="5" data-lat="47.6113" data-lng="-122.3371""#));
        assert!(html.contains(r#"value="0.5""#));
    }

    #[test]
    fn station_names_are_escaped() {
        let stations = vec![Station::new(
            crate::domain::StationId::new(1),
            "<script>alert(1)</script>",
            crate::domain::GeoPoint::new(0.0, 0.0),
        )];
        let html = IndexTemplate::new(&stations).render().unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
