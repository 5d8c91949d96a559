//! Routing service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the directions provider chain
///
/// A Mapbox access token enables the primary provider; without one every
/// pair is routed through the key-less OSRM demo server directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Mapbox API base URL
    #[serde(default = "default_mapbox_base_url")]
    pub mapbox_base_url: String,

    /// Mapbox access token (optional, enables the primary provider)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mapbox_access_token: Option<String>,

    /// OSRM base URL (key-less public fallback)
    #[serde(default = "default_osrm_base_url")]
    pub osrm_base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_mapbox_base_url() -> String {
    "https://api.mapbox.com".to_string()
}

fn default_osrm_base_url() -> String {
    "https://router.project-osrm.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            mapbox_base_url: default_mapbox_base_url(),
            mapbox_access_token: None,
            osrm_base_url: default_osrm_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RoutingConfig {
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
    pub const fn has_primary_credentials(&self) -> bool {
        self.mapbox_access_token.is_some()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.osrm_base_url.is_empty() {
            return Err("osrm_base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RoutingConfig::default();
        assert_eq!(config.mapbox_base_url, "https://api.mapbox.com");
        assert_eq!(config.osrm_base_url, "https://router.project-osrm.org");
        assert_eq!(config.timeout_secs, 10);
        assert!(!config.has_primary_credentials());
    }

    #[test]
    fn test_primary_credentials() {
        let config = RoutingConfig {
            mapbox_access_token: Some("pk.test".to_string()),
            ..Default::default()
        };
        assert!(config.has_primary_credentials());
    }

    #[test]
    fn test_validation() {
        assert!(RoutingConfig::default().validate().is_ok());

        let config = RoutingConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RoutingConfig {
            osrm_base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_token_not_serialized_when_absent() {
        let json = serde_json::to_string(&RoutingConfig::default()).expect("serialize");
        assert!(!json.contains("mapbox_access_token"));
    }
}
