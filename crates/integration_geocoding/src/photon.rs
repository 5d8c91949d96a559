//! Photon geocoding client
//!
//! Key-less enrichment geocoder backed by [Photon](https://photon.komoot.io).
//! Photon is noticeably better than Nominatim at house-number matches, so
//! the resolver consults it when the fallback produced nothing
//! house-number-shaped. Best-effort only.

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

/// Photon API response structures (GeoJSON)
#[allow(dead_code)]
mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct PhotonResponse {
        #[serde(default)]
        pub features: Vec<PhotonFeature>,
    }

    #[derive(Debug, Deserialize)]
    pub struct PhotonFeature {
        pub geometry: PhotonGeometry,
        #[serde(default)]
        pub properties: PhotonProperties,
    }

    #[derive(Debug, Deserialize)]
    pub struct PhotonGeometry {
        /// [longitude, latitude]
        #[serde(default)]
        pub coordinates: Vec<f64>,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct PhotonProperties {
        pub name: Option<String>,
        pub housenumber: Option<String>,
        pub street: Option<String>,
        pub city: Option<String>,
        pub state: Option<String>,
        pub postcode: Option<String>,
        pub country: Option<String>,
        pub osm_key: Option<String>,
        pub osm_value: Option<String>,
    }
}

/// Photon-based geocoding client
#[derive(Debug)]
pub struct PhotonGeocoder {
    client: Client,
    config: GeocodingConfig,
}

impl PhotonGeocoder {
    /// Create a new Photon geocoding client
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

    /// Convert a Photon feature to the internal candidate shape
    fn convert_feature(feature: api::PhotonFeature) -> Option<Candidate> {
        let longitude = *feature.geometry.coordinates.first()?;
        let latitude = *feature.geometry.coordinates.get(1)?;
        let coordinate = Coordinate::new(longitude, latitude).ok()?;

        let props = feature.properties;
        let label = props.name.clone().unwrap_or_default();
        let mut candidate = Candidate::bare(coordinate, label);
        candidate.name = props.name;
        candidate.house_number = props.housenumber;
        candidate.street = props.street;
        candidate.city = props.city;
        candidate.state = props.state;
        candidate.postcode = props.postcode;
        candidate.country = props.country;

        candidate.kind = if candidate.house_number.is_some() {
            PlaceKind::Address
        } else {
            match props.osm_key.as_deref() {
                Some("highway") => PlaceKind::Street,
                Some("place") => PlaceKind::Locality,
                _ => PlaceKind::Unknown,
            }
        };

        Some(candidate)
    }
}

#[async_trait]
impl GeocodeProvider for PhotonGeocoder {
    #[instrument(skip(self), fields(provider = "photon"))]
    async fn geocode(&self, query: &str) -> Result<Vec<Candidate>, GeocodingError> {
        let limit = self.config.max_suggestions.to_string();
        let url = format!("{}/api", self.config.photon_base_url);
        let params = [("q", query), ("limit", limit.as_str()), ("lang", "en")];

        debug!(%query, "Geocoding via Photon");

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

        let parsed: api::PhotonResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let candidates: Vec<Candidate> = parsed
            .features
            .into_iter()
            .filter_map(Self::convert_feature)
            .collect();

        debug!(count = candidates.len(), "Photon candidates");
        Ok(candidates)
    }

    fn provider_name(&self) -> &'static str {
        "photon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(json: serde_json::Value) -> api::PhotonFeature {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_convert_house_number_feature() {
        let candidate = PhotonGeocoder::convert_feature(feature(serde_json::json!({
            "geometry": { "coordinates": [-89.6501, 39.7817] },
            "properties": {
                "housenumber": "123",
                "street": "Main Street",
                "city": "Springfield",
                "state": "Illinois",
                "postcode": "62701",
                "country": "United States",
                "osm_key": "building",
                "osm_value": "yes"
            }
        })))
        .unwrap();

        assert_eq!(candidate.kind, PlaceKind::Address);
        assert_eq!(candidate.house_number.as_deref(), Some("123"));
        assert_eq!(candidate.street.as_deref(), Some("Main Street"));
    }

    #[test]
    fn test_convert_street_feature() {
        let candidate = PhotonGeocoder::convert_feature(feature(serde_json::json!({
            "geometry": { "coordinates": [-89.65, 39.78] },
            "properties": {
                "name": "Main Street",
                "street": "Main Street",
                "osm_key": "highway",
                "osm_value": "residential"
            }
        })))
        .unwrap();

        assert_eq!(candidate.kind, PlaceKind::Street);
    }

    #[test]
    fn test_convert_city_feature() {
        let candidate = PhotonGeocoder::convert_feature(feature(serde_json::json!({
            "geometry": { "coordinates": [-89.65, 39.78] },
            "properties": {
                "name": "Springfield",
                "osm_key": "place",
                "osm_value": "city"
            }
        })))
        .unwrap();

        assert_eq!(candidate.kind, PlaceKind::Locality);
        assert_eq!(candidate.name.as_deref(), Some("Springfield"));
    }

    #[test]
    fn test_convert_skips_short_coordinates() {
        assert!(
            PhotonGeocoder::convert_feature(feature(serde_json::json!({
                "geometry": { "coordinates": [] },
                "properties": { "name": "Broken" }
            })))
            .is_none()
        );
    }

    #[test]
    fn test_missing_properties_tolerated() {
        let candidate = PhotonGeocoder::convert_feature(feature(serde_json::json!({
            "geometry": { "coordinates": [-89.65, 39.78] }
        })))
        .unwrap();

        assert_eq!(candidate.kind, PlaceKind::Unknown);
        assert!(candidate.name.is_none());
    }
}
