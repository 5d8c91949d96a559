//! Waymark HTTP presentation layer
//!
//! This crate provides the HTTP API for Waymark: address suggestions and
//! multi-stop itinerary planning.

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
