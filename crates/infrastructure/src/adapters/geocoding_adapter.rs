//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::Coordinate;
use integration_geocoding::GeocodingClient;
use tracing::{instrument, warn};

/// Adapter exposing the geocoding provider chain as a port
pub struct GeocodingAdapter {
    client: Arc<GeocodingClient>,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"GeocodingClient")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Create a new geocoding adapter
    #[must_use]
    pub fn new(client: Arc<GeocodingClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn suggest(&self, query: &str) -> Result<Vec<String>, ApplicationError> {
        let suggestions = self.client.suggest(query).await.map_err(|e| {
            warn!(%query, error = %e, "Suggestion lookup failed");
            ApplicationError::ExternalService(format!("Geocoding failed: {e}"))
        })?;

        Ok(suggestions
            .into_iter()
            .map(|s| s.label().to_string())
            .collect())
    }

    #[instrument(skip(self))]
    async fn resolve(&self, address: &str) -> Result<Option<Coordinate>, ApplicationError> {
        self.client.resolve(address).await.map_err(|e| {
            warn!(%address, error = %e, "Address resolution failed");
            ApplicationError::ExternalService(format!("Geocoding failed: {e}"))
        })
    }
}
