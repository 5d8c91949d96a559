//! Routing adapter - Implements RoutingPort using integration_routing

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::RoutingPort;
use async_trait::async_trait;
use domain::{Coordinate, Segment};
use integration_routing::RoutingClient;
use tracing::{instrument, warn};

/// Adapter exposing the directions provider chain as a port
pub struct RoutingAdapter {
    client: Arc<RoutingClient>,
}

impl std::fmt::Debug for RoutingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingAdapter")
            .field("client", &"RoutingClient")
            .finish()
    }
}

impl RoutingAdapter {
    /// Create a new routing adapter
    #[must_use]
    pub fn new(client: Arc<RoutingClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RoutingPort for RoutingAdapter {
    #[instrument(skip(self))]
    async fn route(
        &self,
        from: &Coordinate,
        to: &Coordinate,
    ) -> Result<Segment, ApplicationError> {
        // The client has already run its whole fallback chain by the time
        // an error reaches this adapter.
        let leg = self.client.route(from, to).await.map_err(|e| {
            warn!(%from, %to, error = %e, "Pair could not be routed");
            ApplicationError::RoutingFailed(e.to_string())
        })?;

        Ok(Segment::new(
            leg.distance_meters,
            leg.duration_seconds,
            leg.provider,
            leg.raw,
        ))
    }
}

#[cfg(test)]
mod tests {
    use integration_routing::RoutingConfig;

    use super::*;

    #[test]
    fn test_adapter_construction() {
        let client = RoutingClient::new_shared(RoutingConfig::for_testing()).unwrap();
        let adapter = RoutingAdapter::new(client);
        assert!(format!("{adapter:?}").contains("RoutingAdapter"));
    }
}
