//! Directions provider trait

use async_trait::async_trait;
use domain::Coordinate;

use crate::{error::RoutingError, models::RouteLeg};

/// Trait for driving directions providers
///
/// Implemented by all directions backends (Mapbox, OSRM).
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Route between two coordinates, returning one normalized leg
    ///
    /// # Errors
    ///
    /// Returns `RoutingError::NoRoute` when the provider answered but
    /// found no drivable route, or a transport/parse error otherwise.
    async fn route(&self, from: &Coordinate, to: &Coordinate) -> Result<RouteLeg, RoutingError>;

    /// Get the provider name (e.g., "mapbox", "osrm")
    fn provider_name(&self) -> &'static str;
}
