//! Entities - Domain objects with invariants

mod itinerary;

pub use itinerary::{Itinerary, METERS_PER_MILE, Segment};
