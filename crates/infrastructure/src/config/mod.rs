//! Application configuration
//!
//! Sectioned configuration loaded from an optional `waymark.toml` plus
//! `WAYMARK_*` environment variables. Presence of provider credentials in
//! the environment is the sole switch between primary and fallback
//! provider paths; there is no runtime toggle.

mod server;

pub use server::ServerConfig;

use integration_geocoding::GeocodingConfig;
use integration_routing::RoutingConfig;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Geocoding provider chain configuration
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Directions provider chain configuration
    #[serde(default)]
    pub routing: RoutingConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Environment variables use the `WAYMARK_` prefix with `__` as the
    /// section separator, e.g. `WAYMARK_SERVER__PORT=8080` or
    /// `WAYMARK_GEOCODING__MAPBOX_ACCESS_TOKEN=pk.xxx`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file or environment contains values that
    /// do not deserialize into the expected shapes.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("waymark").required(false))
            // Override with environment variables
            .add_source(
                config::Environment::with_prefix("WAYMARK")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, prefixed with its section.
    pub fn validate(&self) -> Result<(), String> {
        self.geocoding
            .validate()
            .map_err(|e| format!("geocoding: {e}"))?;
        self.routing
            .validate()
            .map_err(|e| format!("routing: {e}"))?;
        Ok(())
    }
}
