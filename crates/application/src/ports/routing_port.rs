//! Routing port
//!
//! Defines the interface for routing one coordinate pair. Adapters in the
//! infrastructure layer implement this port on top of the directions
//! provider chain.

use async_trait::async_trait;
use domain::{Coordinate, Segment};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for driving directions between two adjacent stops
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Route a pair of coordinates into one segment
    ///
    /// A missing route is an error (`RoutingFailed`), never a partial
    /// result.
    async fn route(
        &self,
        from: &Coordinate,
        to: &Coordinate,
    ) -> Result<Segment, ApplicationError>;
}
