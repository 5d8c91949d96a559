//! Geocoding provider trait

use async_trait::async_trait;

use crate::{error::GeocodingError, models::Candidate};

/// Trait for geocoding providers
///
/// Implemented by all geocoding backends (Mapbox, Nominatim, Photon).
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    /// Geocode a free-text query into candidates
    ///
    /// # Errors
    ///
    /// Returns an error when the provider is unreachable, answers with a
    /// non-success status, or returns a payload that cannot be parsed.
    /// "No matches" is an empty `Vec`, not an error.
    async fn geocode(&self, query: &str) -> Result<Vec<Candidate>, GeocodingError>;

    /// Get the provider name (e.g., "mapbox", "nominatim")
    fn provider_name(&self) -> &'static str;
}
