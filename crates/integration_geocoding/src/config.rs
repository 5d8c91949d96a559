//! Geocoding service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the geocoding provider chain
///
/// Presence of Mapbox credentials (a static access token, or a client
/// id/secret pair for token exchange) selects the primary path; without
/// them every request goes straight to the key-less Nominatim fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Mapbox API base URL
    #[serde(default = "default_mapbox_base_url")]
    pub mapbox_base_url: String,

    /// Static Mapbox access token (optional, enables the primary provider)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mapbox_access_token: Option<String>,

    /// Client id for token exchange (optional alternative to a static token)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mapbox_client_id: Option<String>,

    /// Client secret for token exchange
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mapbox_client_secret: Option<String>,

    /// Token exchange endpoint used with the client id/secret pair
    #[serde(default = "default_mapbox_token_url")]
    pub mapbox_token_url: String,

    /// Nominatim base URL (key-less fallback)
    #[serde(default = "default_nominatim_base_url")]
    pub nominatim_base_url: String,

    /// Photon base URL (key-less house-number enrichment)
    #[serde(default = "default_photon_base_url")]
    pub photon_base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of suggestions returned per query
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_mapbox_base_url() -> String {
    "https://api.mapbox.com".to_string()
}

fn default_mapbox_token_url() -> String {
    "https://api.mapbox.com/oauth2/token".to_string()
}

fn default_nominatim_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_photon_base_url() -> String {
    "https://photon.komoot.io".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_max_suggestions() -> usize {
    6
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            mapbox_base_url: default_mapbox_base_url(),
            mapbox_access_token: None,
            mapbox_client_id: None,
            mapbox_client_secret: None,
            mapbox_token_url: default_mapbox_token_url(),
            nominatim_base_url: default_nominatim_base_url(),
            photon_base_url: default_photon_base_url(),
            timeout_secs: default_timeout_secs(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl GeocodingConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Whether the primary (credentialed) provider can be used
    #[must_use]
    pub fn has_primary_credentials(&self) -> bool {
        self.mapbox_access_token.is_some()
            || (self.mapbox_client_id.is_some() && self.mapbox_client_secret.is_some())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.nominatim_base_url.is_empty() {
            return Err("nominatim_base_url must not be empty".to_string());
        }

        if self.photon_base_url.is_empty() {
            return Err("photon_base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.max_suggestions == 0 {
            return Err("max_suggestions must be greater than 0".to_string());
        }

        if self.max_suggestions > 20 {
            return Err("max_suggestions must be 20 or less".to_string());
        }

        Ok(())
    }
}
