#![forbid(unsafe_code)]
//! Driving directions integration for Waymark
//!
//! Routes a pair of coordinates through a chain of directions providers:
//! Mapbox Directions as the credentialed primary, the public OSRM demo
//! server as the key-less fallback.
//!
//! # Architecture
//!
//! Each backend implements the [`DirectionsProvider`] trait and normalizes
//! its provider-native route payload into [`RouteLeg`] at the boundary.
//! [`RoutingClient`] drives the fallback chain: the primary is skipped
//! entirely without a credential, transport failures fall through to OSRM,
//! and a well-formed "no route" answer is final for the pair.

mod config;
mod error;
mod mapbox;
mod models;
mod osrm;
mod provider;

pub use config::RoutingConfig;
pub use error::RoutingError;
pub use mapbox::MapboxDirections;
pub use models::RouteLeg;
pub use osrm::OsrmRouter;
pub use provider::DirectionsProvider;

use std::sync::Arc;

use domain::Coordinate;
use tracing::{debug, instrument, warn};

/// Combined directions client with fallback support
#[derive(Debug)]
pub struct RoutingClient {
    mapbox: Option<MapboxDirections>,
    osrm: OsrmRouter,
}

impl RoutingClient {
    /// Create a new routing client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP
    /// clients cannot be initialized.
    pub fn new(config: RoutingConfig) -> Result<Self, RoutingError> {
        config
            .validate()
            .map_err(RoutingError::ConfigurationError)?;

        let mapbox = if config.has_primary_credentials() {
            Some(MapboxDirections::new(&config)?)
        } else {
            warn!("No Mapbox access token configured, using OSRM only");
            None
        };

        let osrm = OsrmRouter::new(&config)?;

        Ok(Self { mapbox, osrm })
    }

    /// Create a shareable client wrapped in Arc
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP clients cannot be initialized.
    pub fn new_shared(config: RoutingConfig) -> Result<Arc<Self>, RoutingError> {
        Ok(Arc::new(Self::new(config)?))
    }

    /// Check if the credentialed primary provider is configured
    #[must_use]
    pub const fn has_primary(&self) -> bool {
        self.mapbox.is_some()
    }

    /// Route one coordinate pair into a normalized leg
    ///
    /// # Errors
    ///
    /// Returns `RoutingError::NoRoute` when no provider found a drivable
    /// route, or the fallback's error when every tier failed.
    #[instrument(skip(self))]
    pub async fn route(
        &self,
        from: &Coordinate,
        to: &Coordinate,
    ) -> Result<RouteLeg, RoutingError> {
        if let Some(ref mapbox) = self.mapbox {
            match mapbox.route(from, to).await {
                Ok(leg) => return Ok(leg),
                Err(e) if e.is_fallback_worthy() => {
                    warn!(%from, %to, error = %e, "Primary directions provider failed, trying fallback");
                },
                Err(e) => return Err(e),
            }
        } else {
            debug!("No primary credential, routing via OSRM directly");
        }

        self.osrm.route(from, to).await
    }
}
