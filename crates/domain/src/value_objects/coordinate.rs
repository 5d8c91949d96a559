//! Geographic coordinate value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A longitude/latitude pair in degrees
///
/// Only produced by a successful geocode; never constructed from
/// caller-supplied numbers without validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
}

impl Coordinate {
    /// Create a new coordinate with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinate` if longitude is not in
    /// [-180, 180] or latitude is not in [-90, 90]. NaN and infinities
    /// fail the range checks and are rejected as well.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, DomainError> {
        if !(-180.0..=180.0).contains(&longitude) || !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::InvalidCoordinate);
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Create a coordinate without validation (for trusted sources)
    ///
    /// Caller must ensure longitude is in [-180, 180] and latitude in [-90, 90]
    #[must_use]
    pub const fn new_unchecked(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Calculate approximate distance to another coordinate in kilometers
    ///
    /// Uses the Haversine formula for great-circle distance. Routing
    /// providers return driven distance; this is only a sanity-check aid.
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;

        let lat1_rad = self.latitude.to_radians();
        let lat2_rad = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (lat1_rad.cos() * lat2_rad.cos()).mul_add(
            (delta_lon / 2.0).sin().powi(2),
            (delta_lat / 2.0).sin().powi(2),
        );
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.longitude, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinate() {
        let coord = Coordinate::new(-77.0365, 38.8977).expect("valid coordinate");
        assert!((coord.longitude() - -77.0365).abs() < f64::EPSILON);
        assert!((coord.latitude() - 38.8977).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(Coordinate::new(180.0, 90.0).is_ok());
        assert!(Coordinate::new(-180.0, -90.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(Coordinate::new(181.0, 0.0).is_err());
        assert!(Coordinate::new(-181.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(Coordinate::new(0.0, 91.0).is_err());
        assert!(Coordinate::new(0.0, -91.0).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::NAN).is_err());
        assert!(Coordinate::new(f64::INFINITY, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_display() {
        let coord = Coordinate::new(13.405, 52.52).expect("valid");
        let display = format!("{coord}");
        assert!(display.contains("13.405"));
        assert!(display.contains("52.52"));
    }

    #[test]
    fn test_distance_same_coordinate() {
        let coord = Coordinate::new_unchecked(13.405, 52.52);
        assert!(coord.distance_km(&coord).abs() < 0.001);
    }

    #[test]
    fn test_distance_dc_to_cupertino() {
        let dc = Coordinate::new_unchecked(-77.0365, 38.8977);
        let cupertino = Coordinate::new_unchecked(-122.0312, 37.332);
        let distance = dc.distance_km(&cupertino);
        // Washington DC to Cupertino is roughly 3,900km great-circle
        assert!((distance - 3900.0).abs() < 150.0);
    }

    #[test]
    fn test_serialization() {
        let coord = Coordinate::new(13.405, 52.52).expect("valid");
        let json = serde_json::to_string(&coord).expect("serialize");
        assert!(json.contains("longitude"));
        assert!(json.contains("latitude"));

        let deserialized: Coordinate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(coord, deserialized);
    }
}
