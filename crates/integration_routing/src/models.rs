//! Internal routed-leg model shared by all directions adapters

use serde::{Deserialize, Serialize};

/// A normalized routed leg between two coordinates
///
/// Provider-native route shapes are converted to this at the adapter
/// boundary; the raw route payload rides along for audit/debug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Driven distance in meters
    pub distance_meters: f64,
    /// Driving duration in seconds
    pub duration_seconds: f64,
    /// Which provider produced this leg
    pub provider: String,
    /// Provider-native route payload
    pub raw: serde_json::Value,
}

impl RouteLeg {
    /// Create a new route leg
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
