//! Multi-stop itinerary entity
//!
//! An `Itinerary` is assembled atomically at the end of a planning request
//! and is immutable afterwards. It is never persisted by this subsystem;
//! storage, if any, is the caller's concern.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::Coordinate;

/// Meters in one statute mile
pub const METERS_PER_MILE: f64 = 1609.344;

/// The routed result for one pair of adjacent stops
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Driven distance in meters
    pub distance_meters: f64,
    /// Driving duration in seconds
    pub duration_seconds: f64,
    /// Which directions provider produced this segment
    pub provider: String,
    /// Provider-native route payload, kept opaque for audit/debug
    pub raw: serde_json::Value,
}

impl Segment {
    /// Create a new segment
    #[must_use]
    pub fn new(
        distance_meters: f64,
        duration_seconds: f64,
        provider: impl Into<String>,
        raw: serde_json::Value,
    ) -> Self {
        Self {
            distance_meters,
            duration_seconds,
            provider: provider.into(),
            raw,
        }
    }
}

/// A complete multi-stop driving plan
///
/// Invariant: `segments.len() == coordinates.len() - 1 == addresses.len() - 1`.
/// The meters/seconds totals are canonical; miles/minutes are derived once
/// at construction for display convenience.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    /// The stops, in travel order, as resolved from caller input
    pub addresses: Vec<String>,
    /// Resolved coordinate for each stop (same order and length as `addresses`)
    pub coordinates: Vec<Coordinate>,
    /// Routed segment for each consecutive stop pair
    pub segments: Vec<Segment>,
    /// Sum of segment distances in meters
    pub total_distance_meters: f64,
    /// Sum of segment durations in seconds
    pub total_duration_seconds: f64,
    /// Derived: `total_distance_meters / 1609.344`
    pub total_miles: f64,
    /// Derived: `total_duration_seconds / 60`
    pub total_minutes: f64,
}

impl Itinerary {
    /// Assemble an itinerary from resolved stops and routed segments
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InconsistentItinerary` when the part counts
    /// do not line up or there are fewer than two stops.
    pub fn new(
        addresses: Vec<String>,
        coordinates: Vec<Coordinate>,
        segments: Vec<Segment>,
    ) -> Result<Self, DomainError> {
        if addresses.len() < 2 {
            return Err(DomainError::InconsistentItinerary(format!(
                "{} stop(s), need at least 2",
                addresses.len()
            )));
        }
        if coordinates.len() != addresses.len() {
            return Err(DomainError::InconsistentItinerary(format!(
                "{} addresses but {} coordinates",
                addresses.len(),
                coordinates.len()
            )));
        }
        if segments.len() != addresses.len() - 1 {
            return Err(DomainError::InconsistentItinerary(format!(
                "{} stops but {} segments",
                addresses.len(),
                segments.len()
            )));
        }

        let total_distance_meters: f64 = segments.iter().map(|s| s.distance_meters).sum();
        let total_duration_seconds: f64 = segments.iter().map(|s| s.duration_seconds).sum();

        Ok(Self {
            addresses,
            coordinates,
            segments,
            total_distance_meters,
            total_duration_seconds,
            total_miles: total_distance_meters / METERS_PER_MILE,
            total_minutes: total_duration_seconds / 60.0,
        })
    }

    /// Number of stops in the itinerary
    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.addresses.len()
    }
}
