//! Geographic points and great-circle distance.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Earth's mean radius in miles.
///
/// Fixes the unit of every distance in the crate: radii and computed
/// distances are both in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// A point on the Earth's surface, in decimal degrees.
///
/// Construction never fails. Coordinates outside `[-90, 90]` / `[-180, 180]`
/// are carried as-is and still yield a (meaningless but finite) distance,
/// so callers that care should check [`GeoPoint::is_valid`].
///
/// # Examples
///
/// ```
/// use restaurant_server::domain::GeoPoint;
///
/// let westlake = GeoPoint::new(47.6113, -122.3371);
/// let pioneer_square = GeoPoint::new(47.6021, -122.3296);
///
/// let d = westlake.distance_miles(&pioneer_square);
/// assert!(d > 0.6 && d < 0.8);
/// assert_eq!(d, pioneer_square.distance_miles(&westlake));
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True if both components are finite and within their geographic range.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to `other` in miles (haversine formula).
    ///
    /// Symmetric, zero for identical points, and never negative. The `atan2`
    /// form stays accurate for the sub-mile separations this crate cares about.
    pub fn distance_miles(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lng = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
        // Rounding can push `a` a hair outside [0, 1] for antipodal points.
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_MILES * c
    }
}

impl fmt::Debug for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoPoint({}, {})", self.latitude, self.longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
