#![forbid(unsafe_code)]
//! Geocoding integration for Waymark
//!
//! Turns free-text address input into ranked, deduplicated suggestions and
//! single best-match coordinates, using a chain of providers: Mapbox as the
//! credentialed primary, Nominatim as the key-less fallback, and Photon as
//! best-effort house-number enrichment on sparse fallback results.
//!
//! # Architecture
//!
//! Each backend implements the [`GeocodeProvider`] trait and converts its
//! provider-native payload into the internal [`Candidate`] shape at the
//! boundary. [`GeocodingClient`] drives the fallback chain and applies the
//! pure [`ranking`] engine to whatever candidates survive.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, GeocodingConfig};
//!
//! let client = GeocodingClient::new(GeocodingConfig::default())?;
//!
//! let suggestions = client.suggest("1600 Pennsylvania Ave NW").await?;
//! for suggestion in &suggestions {
//!     println!("[{}] {}", suggestion.tier(), suggestion.label());
//! }
//! ```

mod config;
mod error;
mod mapbox;
mod models;
mod nominatim;
mod photon;
mod provider;
pub mod ranking;
mod token;
mod urlencoding;

pub use config::GeocodingConfig;
pub use error::GeocodingError;
pub use mapbox::MapboxGeocoder;
pub use models::{Candidate, PlaceKind};
pub use nominatim::NominatimGeocoder;
pub use photon::PhotonGeocoder;
pub use provider::GeocodeProvider;
pub use token::TokenCache;

use std::sync::Arc;

use domain::{Coordinate, Suggestion};
use tracing::{debug, info, instrument, warn};

/// Minimum trimmed query length before any provider is consulted
const MIN_QUERY_CHARS: usize = 3;

/// Combined geocoding client with fallback and enrichment
///
/// Uses Mapbox when credentials are configured; otherwise (or on primary
/// failure) Nominatim answers, topped up by one best-effort Photon call
/// when the fallback result set looks house-number-free.
#[derive(Debug)]
pub struct GeocodingClient {
    mapbox: Option<MapboxGeocoder>,
    nominatim: NominatimGeocoder,
    photon: PhotonGeocoder,
    config: GeocodingConfig,
}

impl GeocodingClient {
    /// Create a new geocoding client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP
    /// clients cannot be initialized.
    pub fn new(config: GeocodingConfig) -> Result<Self, GeocodingError> {
        config
            .validate()
            .map_err(GeocodingError::ConfigurationError)?;

        let mapbox = if config.has_primary_credentials() {
            Some(MapboxGeocoder::new(&config)?)
        } else {
            warn!("No Mapbox credentials configured, using Nominatim only");
            None
        };

        let nominatim = NominatimGeocoder::new(&config)?;
        let photon = PhotonGeocoder::new(&config)?;

        Ok(Self {
            mapbox,
            nominatim,
            photon,
            config,
        })
    }

    /// Create a shareable client wrapped in Arc
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP clients cannot be initialized.
    pub fn new_shared(config: GeocodingConfig) -> Result<Arc<Self>, GeocodingError> {
        Ok(Arc::new(Self::new(config)?))
    }

    /// Check if the credentialed primary provider is configured
    #[must_use]
    pub const fn has_primary(&self) -> bool {
        self.mapbox.is_some()
    }

    /// Ranked, deduplicated suggestions for a free-text query
    ///
    /// Always `Ok` with an empty list when nothing matched; `Err` only on
    /// hard faults (every available tier failed).
    #[instrument(skip(self))]
    pub async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, GeocodingError> {
        let candidates = self.collect_candidates(query).await?;
        Ok(ranking::rank(&candidates, self.config.max_suggestions))
    }

    /// Best single match for an address, as a coordinate
    ///
    /// Used by the itinerary planner. `Ok(None)` when no provider produced
    /// a usable candidate.
    #[instrument(skip(self))]
    pub async fn resolve(&self, address: &str) -> Result<Option<Coordinate>, GeocodingError> {
        let ordered = ranking::order(self.collect_candidates(address).await?);
        Ok(ordered.first().map(|c| c.coordinate))
    }

    /// Run the provider chain: primary, then fallback, then enrichment
    async fn collect_candidates(&self, query: &str) -> Result<Vec<Candidate>, GeocodingError> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            debug!(%query, "Query below minimum length, skipping providers");
            return Ok(vec![]);
        }

        // Primary results are trusted at face value, never merged with
        // fallback output.
        if let Some(ref mapbox) = self.mapbox {
            match mapbox.geocode(query).await {
                Ok(candidates) if !candidates.is_empty() => return Ok(candidates),
                Ok(_) => {
                    info!(%query, "Primary geocoder returned no candidates, trying fallback");
                },
                Err(e) => {
                    warn!(%query, error = %e, "Primary geocoder failed, trying fallback");
                },
            }
        }

        let fallback = self.nominatim.geocode(query).await?;

        // Enrich only when the fallback looks house-number-free: empty, or
        // no ranked label contains a digit.
        let ranked = ranking::rank(&fallback, self.config.max_suggestions);
        let needs_enrichment = ranked.is_empty() || !ranked.iter().any(Suggestion::has_digit);
        if !needs_enrichment {
            return Ok(fallback);
        }

        match self.photon.geocode(query).await {
            Ok(mut merged) => {
                debug!(count = merged.len(), "Merging enrichment candidates ahead of fallback");
                merged.extend(fallback);
                Ok(merged)
            },
            Err(e) => {
                // enrichment is best-effort and must never fail the request
                debug!(error = %e, "Enrichment geocoder failed, keeping fallback results");
                Ok(fallback)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credentials() {
        let client = GeocodingClient::new(GeocodingConfig::for_testing()).unwrap();
        assert!(!client.has_primary());
    }

    #[test]
    fn test_client_with_static_token() {
        let config = GeocodingConfig {
            mapbox_access_token: Some("pk.test".to_string()),
            ..GeocodingConfig::for_testing()
        };

        let client = GeocodingClient::new(config).unwrap();
        assert!(client.has_primary());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GeocodingConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            GeocodingClient::new(config),
            Err(GeocodingError::ConfigurationError(_))
        ));
    }

    #[tokio::test]
    async fn test_short_query_short_circuits() {
        // base URLs point at nothing routable; a provider call would error
        let config = GeocodingConfig {
            nominatim_base_url: "http://127.0.0.1:1".to_string(),
            photon_base_url: "http://127.0.0.1:1".to_string(),
            ..GeocodingConfig::for_testing()
        };
        let client = GeocodingClient::new(config).unwrap();

        assert!(client.suggest("ab").await.unwrap().is_empty());
        assert!(client.suggest("  a  ").await.unwrap().is_empty());
        assert!(client.resolve("  ").await.unwrap().is_none());
    }
}
