//! Mapbox Geocoding API client
//!
//! Credentialed primary geocoder. Authenticates with either a static
//! access token or a client-credentials exchange whose short-lived token
//! is held in the adapter's [`TokenCache`].

use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinate;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    config::GeocodingConfig,
    error::GeocodingError,
    models::{Candidate, PlaceKind},
    provider::GeocodeProvider,
    token::TokenCache,
    urlencoding,
};

/// Mapbox API response structures
#[allow(dead_code)]
mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct MapboxResponse {
        #[serde(default)]
        pub features: Vec<MapboxFeature>,
    }

    #[derive(Debug, Deserialize)]
    pub struct MapboxFeature {
        /// Full display label, e.g. "123 Main St, Springfield, IL, USA"
        pub place_name: Option<String>,
        /// Primary name: street for addresses, name for POIs/places
        pub text: Option<String>,
        /// House number, present on matched address features
        pub address: Option<String>,
        #[serde(default)]
        pub place_type: Vec<String>,
        /// [longitude, latitude]
        #[serde(default)]
        pub center: Vec<f64>,
        #[serde(default)]
        pub context: Vec<ContextEntry>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ContextEntry {
        /// Layer-prefixed id, e.g. "place.12345" or "region.678"
        pub id: String,
        pub text: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct TokenResponse {
        pub access_token: String,
        pub expires_in: Option<u64>,
    }
}

/// Mapbox geocoding client
#[derive(Debug)]
pub struct MapboxGeocoder {
    client: Client,
    config: GeocodingConfig,
    tokens: TokenCache,
}

impl MapboxGeocoder {
    /// Create a new Mapbox geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if no credential is configured or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        if !config.has_primary_credentials() {
            return Err(GeocodingError::ConfigurationError(
                "Mapbox credentials are required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("Waymark/1.0 (+https://github.com/waymark-dev/waymark)")
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        let tokens = config.mapbox_access_token.as_ref().map_or_else(
            TokenCache::new,
            |token| TokenCache::preloaded(token),
        );

        Ok(Self {
            client,
            config: config.clone(),
            tokens,
        })
    }

    /// Current access token, exchanging client credentials when needed
    async fn access_token(&self) -> Result<String, GeocodingError> {
        if let Some(token) = self.tokens.current().await {
            return Ok(token);
        }

        let (Some(client_id), Some(client_secret)) = (
            &self.config.mapbox_client_id,
            &self.config.mapbox_client_secret,
        ) else {
            return Err(GeocodingError::ConfigurationError(
                "Mapbox client credentials are incomplete".to_string(),
            ));
        };

        debug!("Exchanging client credentials for a Mapbox access token");

        let response = self
            .client
            .post(&self.config.mapbox_token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", client_id.as_str()),
                ("client_secret", client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // body dropped on purpose: token endpoint errors may echo credentials
            return Err(GeocodingError::RequestFailed(format!(
                "token exchange: HTTP {status}"
            )));
        }

        let token: api::TokenResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let ttl = Duration::from_secs(token.expires_in.unwrap_or(3600));
        self.tokens.store(&token.access_token, ttl).await;

        Ok(token.access_token)
    }

    /// Convert a Mapbox feature to the internal candidate shape
    fn convert_feature(feature: api::MapboxFeature) -> Option<Candidate> {
        let longitude = *feature.center.first()?;
        let latitude = *feature.center.get(1)?;
        let coordinate = Coordinate::new(longitude, latitude).ok()?;

        let label = feature
            .place_name
            .clone()
            .or_else(|| feature.text.clone())
            .unwrap_or_default();
        let mut candidate = Candidate::bare(coordinate, label);

        match feature.place_type.first().map(String::as_str) {
            Some("address") => {
                candidate.street = feature.text;
                candidate.house_number = feature.address;
                candidate.kind = if candidate.house_number.is_some() {
                    PlaceKind::Address
                } else {
                    PlaceKind::Street
                };
            },
            Some("poi") => {
                candidate.name = feature.text;
                candidate.kind = PlaceKind::Poi;
            },
            Some("place" | "locality" | "neighborhood") => {
                candidate.name = feature.text;
                candidate.kind = PlaceKind::Locality;
            },
            _ => {
                candidate.name = feature.text;
            },
        }

        for entry in feature.context {
            let Some(text) = entry.text else { continue };
            let layer = entry.id.split('.').next().unwrap_or_default();
            match layer {
                "place" => candidate.city = Some(text),
                "region" => candidate.state = Some(text),
                "postcode" => candidate.postcode = Some(text),
                "country" => candidate.country = Some(text),
                _ => {},
            }
        }

        Some(candidate)
    }
}

#[async_trait]
impl GeocodeProvider for MapboxGeocoder {
    #[instrument(skip(self), fields(provider = "mapbox"))]
    async fn geocode(&self, query: &str) -> Result<Vec<Candidate>, GeocodingError> {
        let token = self.access_token().await?;
        let limit = self.config.max_suggestions.to_string();

        let url = format!(
            "{}/geocoding/v5/mapbox.places/{}.json",
            self.config.mapbox_base_url,
            urlencoding::encode(query)
        );

        debug!(%query, "Geocoding via Mapbox");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("access_token", token.as_str()),
                ("limit", limit.as_str()),
                ("autocomplete", "true"),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodingError::RequestFailed(format!(
                "HTTP {status}: {body}"
            )));
        }

        let parsed: api::MapboxResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let candidates: Vec<Candidate> = parsed
            .features
            .into_iter()
            .filter_map(Self::convert_feature)
            .collect();

        debug!(count = candidates.len(), "Mapbox candidates");
        Ok(candidates)
    }

    fn provider_name(&self) -> &'static str {
        "mapbox"
    }
}
