//! Domain-level errors

use thiserror::Error;

/// Errors raised when constructing domain objects
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinate outside the valid longitude/latitude ranges
    #[error(
        "Invalid coordinate: longitude must be -180 to 180, latitude must be -90 to 90"
    )]
    InvalidCoordinate,

    /// Itinerary parts do not line up (addresses vs. coordinates vs. segments)
    #[error("Inconsistent itinerary: {0}")]
    InconsistentItinerary(String),
}
