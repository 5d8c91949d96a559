//! Nominatim geocoding client
//!
//! Key-less fallback geocoder backed by the
//! [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap).

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
};

/// Nominatim API response structures
#[allow(dead_code)]
mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct NominatimPlace {
        pub lat: String,
        pub lon: String,
        pub display_name: Option<String>,
        pub name: Option<String>,
        pub class: Option<String>,
        #[serde(rename = "type")]
        pub kind: Option<String>,
        pub address: Option<NominatimAddress>,
    }

    #[derive(Debug, Deserialize)]
    pub struct NominatimAddress {
        pub house_number: Option<String>,
        pub road: Option<String>,
        pub city: Option<String>,
        pub town: Option<String>,
        pub village: Option<String>,
        pub state: Option<String>,
        pub postcode: Option<String>,
        pub country: Option<String>,
    }
}

/// Nominatim-based geocoding client
#[derive(Debug)]
pub struct NominatimGeocoder {
    client: Client,
    config: GeocodingConfig,
}

impl NominatimGeocoder {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("Waymark/1.0 (+https://github.com/waymark-dev/waymark)")
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Convert a Nominatim place to the internal candidate shape
    fn convert_place(place: api::NominatimPlace) -> Option<Candidate> {
        let latitude: f64 = place.lat.parse().ok()?;
        let longitude: f64 = place.lon.parse().ok()?;
        let coordinate = Coordinate::new(longitude, latitude).ok()?;

        let label = place.display_name.clone().unwrap_or_default();
        let mut candidate = Candidate::bare(coordinate, label);
        candidate.name = place.name.filter(|n| !n.is_empty());

        if let Some(address) = place.address {
            candidate.house_number = address.house_number;
            candidate.street = address.road;
            candidate.city = address.city.or(address.town).or(address.village);
            candidate.state = address.state;
            candidate.postcode = address.postcode;
            candidate.country = address.country;
        }

        let class = place.class.as_deref().unwrap_or_default();
        let kind = place.kind.as_deref().unwrap_or_default();
        candidate.kind = if candidate.house_number.is_some() {
            PlaceKind::Address
        } else if class == "highway" || kind == "road" {
            PlaceKind::Street
        } else if class == "place" || class == "boundary" {
            PlaceKind::Locality
        } else {
            PlaceKind::Unknown
        };

        Some(candidate)
    }
}

#[async_trait]
impl GeocodeProvider for NominatimGeocoder {
    #[instrument(skip(self), fields(provider = "nominatim"))]
    async fn geocode(&self, query: &str) -> Result<Vec<Candidate>, GeocodingError> {
        let limit = self.config.max_suggestions.to_string();
        let url = format!("{}/search", self.config.nominatim_base_url);
        let params = [
            ("q", query),
            ("format", "jsonv2"),
            ("addressdetails", "1"),
            ("limit", limit.as_str()),
            ("accept-language", "en"),
        ];

        debug!(%query, "Geocoding via Nominatim");

        let response = self
            .client
            .get(&url)
            .query(&params)
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

        let places: Vec<api::NominatimPlace> = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let candidates: Vec<Candidate> = places
            .into_iter()
            .filter_map(Self::convert_place)
            .collect();

        debug!(count = candidates.len(), "Nominatim candidates");
        Ok(candidates)
    }

    fn provider_name(&self) -> &'static str {
        "nominatim"
    }
}
