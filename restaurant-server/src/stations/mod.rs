//! Transit station lookup.
//!
//! A static, read-only registry of stations with fixed coordinates. Built
//! once at startup and shared; resolving a station is the usual first step
//! before a proximity search around it.

mod error;
mod registry;

pub use error::StationError;
pub use registry::{StationRegistry, StationRegistryBuilder, sound_transit_link};
