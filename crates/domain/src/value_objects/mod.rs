//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod suggestion;

pub use coordinate::Coordinate;
pub use suggestion::{SpecificityTier, Suggestion};
