//! Transit station types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// Numeric identifier of a transit station.
///
/// # Examples
///
/// ```
/// use restaurant_server::domain::StationId;
///
/// let id = StationId::parse("5").unwrap();
/// assert_eq!(id.get(), 5);
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("five").is_err());
/// assert!(StationId::parse("-1").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(u32);

impl StationId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Parse a station id from a path segment or query value.
    ///
    /// Only plain base-10 digits are accepted; no sign, no whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidStationId {
                reason: "must contain only digits 0-9",
            });
        }

        s.parse::<u32>().map(StationId).map_err(|_| InvalidStationId {
            reason: "out of range",
        })
    }

    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named transit station at a fixed location.
///
/// Serialized flat, with the coordinates alongside the id and name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    #[serde(flatten)]
    pub location: GeoPoint,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            id,
            name: name.into(),
            location,
        }
    }
}
