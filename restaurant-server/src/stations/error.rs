//! Station registry error types.

use crate::domain::StationId;

/// Errors from the station registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StationError {
    /// No station with this id
    #[error("station {0} not found")]
    NotFound(StationId),

    /// Two stations share an id
    #[error("duplicate station id: {0}")]
    DuplicateId(StationId),
}
