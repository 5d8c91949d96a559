//! Mapbox Directions API client
//!
//! Credentialed primary directions provider (driving profile).

use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinate;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    config::RoutingConfig, error::RoutingError, models::RouteLeg, provider::DirectionsProvider,
};

/// Mapbox Directions API response structures
#[allow(dead_code)]
mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct DirectionsResponse {
        pub code: Option<String>,
        #[serde(default)]
        pub routes: Vec<Route>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Route {
        /// Meters
        pub distance: f64,
        /// Seconds
        pub duration: f64,
    }
}

/// Mapbox directions client
#[derive(Debug)]
pub struct MapboxDirections {
    client: Client,
    config: RoutingConfig,
}

impl MapboxDirections {
    /// Create a new Mapbox directions client
    ///
    /// # Errors
    ///
    /// Returns an error if no access token is configured or the HTTP
    /// client cannot be initialized.
    pub fn new(config: &RoutingConfig) -> Result<Self, RoutingError> {
        if !config.has_primary_credentials() {
            return Err(RoutingError::ConfigurationError(
                "Mapbox access token is required".to_string(),
            ));
        }

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
impl DirectionsProvider for MapboxDirections {
    #[instrument(skip(self), fields(provider = "mapbox"))]
    async fn route(&self, from: &Coordinate, to: &Coordinate) -> Result<RouteLeg, RoutingError> {
        let token = self.config.mapbox_access_token.as_deref().ok_or_else(|| {
            RoutingError::ConfigurationError("Mapbox access token is required".to_string())
        })?;

        let url = format!(
            "{}/directions/v5/mapbox/driving/{},{};{},{}",
            self.config.mapbox_base_url,
            from.longitude(),
            from.latitude(),
            to.longitude(),
            to.latitude()
        );

        debug!(%from, %to, "Routing via Mapbox");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("access_token", token),
                ("alternatives", "false"),
                ("overview", "false"),
            ])
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
        let parsed: api::DirectionsResponse = serde_json::from_value(raw.clone())
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
            "Mapbox route found"
        );

        Ok(RouteLeg::new(
            route.distance,
            route.duration,
            "mapbox",
            raw_route,
        ))
    }

    fn provider_name(&self) -> &'static str {
        "mapbox"
    }
}
