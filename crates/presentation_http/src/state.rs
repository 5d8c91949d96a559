//! Application state shared across handlers

use std::sync::Arc;

use application::{ItineraryService, ports::GeocodingPort};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Geocoding port for the suggest endpoint
    pub geocoding: Arc<dyn GeocodingPort>,
    /// Itinerary planning service
    pub itinerary: Arc<ItineraryService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("geocoding", &"<GeocodingPort>")
            .field("itinerary", &self.itinerary)
            .finish()
    }
}
