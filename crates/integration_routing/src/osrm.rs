//! OSRM routing client
//!
//! Key-less fallback directions provider backed by the public
//! [OSRM demo server](https://router.project-osrm.org).

use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinate;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    config::RoutingConfig, error::RoutingError, models::RouteLeg, provider::DirectionsProvider,
};

/// OSRM API response structures
#[allow(dead_code)]
mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct OsrmResponse {
        pub code: Option<String>,
        #[serde(default)]
        pub routes: Vec<OsrmRoute>,
    }

    #[derive(Debug, Deserialize)]
    pub struct OsrmRoute {
        /// Meters
        pub distance: f64,
        /// Seconds
        pub duration: f64,
    }
}

/// OSRM-based directions client
#[derive(Debug)]
pub struct OsrmRouter {
    client: Client,
    config: RoutingConfig,
}

impl OsrmRouter {
    /// Create a new OSRM directions client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &RoutingConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("Waymark/1.0 (+https://github.com/waymark-dev/waymark)")
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl DirectionsProvider for OsrmRouter {
    #[instrument(skip(self), fields(provider = "osrm"))]
    async fn route(&self, from: &Coordinate, to: &Coordinate) -> Result<RouteLeg, RoutingError> {
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}",
            self.config.osrm_base_url,
            from.longitude(),
            from.latitude(),
            to.longitude(),
            to.latitude()
        );

        debug!(%from, %to, "Routing via OSRM");

        let response = self
            .client
            .get(&url)
            .query(&[("overview", "false")])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RoutingError::Timeout
                } else {
                    RoutingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RoutingError::RequestFailed(format!(
                "HTTP {status}: {body}"
            )));
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;
        let parsed: api::OsrmResponse = serde_json::from_value(raw.clone())
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        if parsed.routes.is_empty() || parsed.code.as_deref().is_some_and(|c| c != "Ok") {
            return Err(RoutingError::NoRoute {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let route = &parsed.routes[0];
        let raw_route = raw
            .get("routes")
            .and_then(|r| r.get(0))
            .cloned()
            .unwrap_or(serde_json::Value::Null);

        debug!(
            distance_meters = route.distance,
            duration_seconds = route.duration,
            "OSRM route found"
        );

        Ok(RouteLeg::new(
            route.distance,
            route.duration,
            "osrm",
            raw_route,
        ))
    }

    fn provider_name(&self) -> &'static str {
        "osrm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing() {
        let json = r#"{
            "code": "Ok",
            "routes": [{ "distance": 7250000.1, "duration": 250000.5, "legs": [] }]
        }"#;
        let parsed: api::OsrmResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.code.as_deref(), Some("Ok"));
        assert!((parsed.routes[0].duration - 250000.5).abs() < 1e-9);
    }

    #[test]
    fn test_no_route_code() {
        let json = r#"{ "code": "NoRoute", "routes": [] }"#;
        let parsed: api::OsrmResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.code.as_deref(), Some("NoRoute"));
    }

    #[test]
    fn test_missing_routes_field_tolerated() {
        let json = r#"{ "code": "Ok" }"#;
        let parsed: api::OsrmResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.routes.is_empty());
    }
}
