//! Station registry and the Sound Transit Link data.

use std::collections::HashMap;

use crate::domain::{GeoPoint, Station, StationId};

use super::error::StationError;

/// An immutable collection of stations, in line order.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    stations: Vec<Station>,
    /// Map from id to position in `stations`.
    by_id: HashMap<StationId, usize>,
}

impl StationRegistry {
    /// Build a registry from a list of stations.
    ///
    /// Fails if two stations share an id. List order is preserved.
    pub fn new(stations: Vec<Station>) -> Result<Self, StationError> {
        let mut by_id = HashMap::with_capacity(stations.len());
        for (i, station) in stations.iter().enumerate() {
            if by_id.insert(station.id, i).is_some() {
                return Err(StationError::DuplicateId(station.id));
            }
        }

        Ok(Self { stations, by_id })
    }

    /// All stations, in registry order.
    pub fn list(&self) -> &[Station] {
        &self.stations
    }

    /// Look up a station by id.
    pub fn get(&self, id: StationId) -> Result<&Station, StationError> {
        self.by_id
            .get(&id)
            .map(|&i| &self.stations[i])
            .ok_or(StationError::NotFound(id))
    }

    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if there are no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Builder for creating a station registry.
///
/// Provides a fluent API for adding stations. Duplicate ids are reported by
/// [`build`](Self::build), the same as [`StationRegistry::new`].
#[derive(Debug, Default)]
pub struct StationRegistryBuilder {
    stations: Vec<Station>,
}

impl StationRegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    pub fn add(mut self, id: u32, name: &str, latitude: f64, longitude: f64) -> Self {
        self.stations.push(Station::new(
            StationId::new(id),
            name,
            GeoPoint::new(latitude, longitude),
        ));
        self
    }

    /// Build the registry.
    pub fn build(self) -> Result<StationRegistry, StationError> {
        StationRegistry::new(self.stations)
    }
}

/// The Sound Transit Link light rail stations, Northgate to SeaTac.
pub fn sound_transit_link() -> Result<StationRegistry, StationError> {
    StationRegistryBuilder::new()
        .add(1, "Northgate Station", 47.6568, -122.3254)
        .add(2, "U-District Station", 47.6553, -122.3035)
        .add(3, "University of Washington Station", 47.6564, -122.3050)
        .add(4, "Capitol Hill Station", 47.6205, -122.3212)
        .add(5, "Westlake Station", 47.6113, -122.3371)
        .add(6, "University Street Station", 47.6078, -122.3331)
        .add(7, "Pioneer Square Station", 47.6021, -122.3296)
        .add(8, "International District Station", 47.5972, -122.3277)
        .add(9, "Beacon Hill Station", 47.5809, -122.3121)
        .add(10, "Othello Station", 47.5556, -122.2963)
        .add(11, "Rainier Avenue Station", 47.5228, -122.2739)
        .add(12, "SeaTac/Airport Station", 47.4502, -122.3088)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: u32, name: &str) -> Station {
        Station::new(StationId::new(id), name, GeoPoint::new(47.6, -122.3))
    }

    #[test]
    fn empty_registry() {
        let registry = StationRegistry::new(vec![]).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.list().is_empty());
        assert_eq!(
            registry.get(StationId::new(1)),
            Err(StationError::NotFound(StationId::new(1)))
        );
    }

    #[test]
    fn new_preserves_order_and_looks_up() {
        let registry =
            StationRegistry::new(vec![station(3, "C"), station(1, "A"), station(2, "B")])
                .unwrap();

        let names: Vec<_> = registry.list().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
        assert_eq!(registry.get(StationId::new(1)).unwrap().name, "A");
        assert_eq!(registry.get(StationId::new(3)).unwrap().name, "C");
    }

    #[test]
    fn new_rejects_duplicates() {
        let err = StationRegistry::new(vec![station(1, "A"), station(1, "B")]).unwrap_err();
        assert_eq!(err, StationError::DuplicateId(StationId::new(1)));
    }

    #[test]
    fn builder_preserves_order() {
        let registry = StationRegistryBuilder::new()
            .add(2, "Second", 47.1, -122.1)
            .add(1, "First", 47.0, -122.0)
            .build()
            .unwrap();

        let names: Vec<_> = registry.list().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Second", "First"]);
        assert_eq!(registry.get(StationId::new(1)).unwrap().name, "First");
    }

    #[test]
    fn builder_rejects_duplicates() {
        let err = StationRegistryBuilder::new()
            .add(1, "First", 47.0, -122.0)
            .add(2, "Second", 47.1, -122.1)
            .add(1, "Impostor", 0.0, 0.0)
            .build()
            .unwrap_err();

        assert_eq!(err, StationError::DuplicateId(StationId::new(1)));
    }

    #[test]
    fn sound_transit_link_stations() {
        let registry = sound_transit_link().unwrap();
        assert_eq!(registry.len(), 12);

        let first = &registry.list()[0];
        assert_eq!(first.id, StationId::new(1));
        assert_eq!(first.name, "Northgate Station");

        let westlake = registry.get(StationId::new(5)).unwrap();
        assert_eq!(westlake.name, "Westlake Station");
        assert_eq!(westlake.location, GeoPoint::new(47.6113, -122.3371));

        let seatac = registry.get(StationId::new(12)).unwrap();
        assert_eq!(seatac.name, "SeaTac/Airport Station");

        assert!(registry.get(StationId::new(13)).is_err());
        assert!(registry.get(StationId::new(0)).is_err());
    }

    #[test]
    fn sound_transit_link_ids_are_sequential() {
        let registry = sound_transit_link().unwrap();
        for (i, station) in registry.list().iter().enumerate() {
            assert_eq!(station.id.get() as usize, i + 1);
            assert!(station.location.is_valid());
        }
    }
}
