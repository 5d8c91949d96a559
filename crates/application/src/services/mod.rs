//! Application services - Use case implementations

mod itinerary_service;

pub use itinerary_service::{ItineraryService, MAX_STOPS, MIN_STOPS};
