//! Domain types for the restaurant finder.
//!
//! Plain value types shared by the search core, the station registry and
//! the web layer. Identifiers validate at parse time; coordinates do not,
//! since the distance formula is defined for any real input.

mod point;
mod restaurant;
mod station;

pub use point::{EARTH_RADIUS_MILES, GeoPoint};
pub use restaurant::{Restaurant, RestaurantDetails, RestaurantId};
pub use station::{InvalidStationId, Station, StationId};
