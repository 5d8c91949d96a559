//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Location API (v1)
        .route("/v1/locations/suggest", get(handlers::suggest::suggest))
        // Itinerary API (v1)
        .route("/v1/itineraries", post(handlers::plan::plan))
        // Attach state
        .with_state(state)
}
