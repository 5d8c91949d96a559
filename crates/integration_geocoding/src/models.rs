//! Internal candidate model shared by all geocoding adapters
//!
//! Provider-native response shapes are deserialized privately inside each
//! adapter and converted to `Candidate` at the boundary; nothing above the
//! adapters ever sees provider field names.

use domain::Coordinate;

/// Coarse place classification derived from the provider's type/category field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceKind {
    /// House-number or full-address level
    Address,
    /// Street/road level
    Street,
    /// City, town, neighborhood, or similar
    Locality,
    /// Point of interest
    Poi,
    /// Provider gave no usable classification
    Unknown,
}

/// A geocoded candidate in the single internal shape
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Resolved coordinate
    pub coordinate: Coordinate,
    /// Provider classification hint
    pub kind: PlaceKind,
    /// Provider display label (fallback descriptor)
    pub label: String,
    /// Place name (POI name, locality name)
    pub name: Option<String>,
    /// House number, when the provider matched one
    pub house_number: Option<String>,
    /// Street/road name
    pub street: Option<String>,
    /// City/town/village
    pub city: Option<String>,
    /// State/region
    pub state: Option<String>,
    /// Postal code
    pub postcode: Option<String>,
    /// Country
    pub country: Option<String>,
}

impl Candidate {
    /// A bare candidate with only a coordinate and display label
    #[must_use]
    pub fn bare(coordinate: Coordinate, label: impl Into<String>) -> Self {
        Self {
            coordinate,
            kind: PlaceKind::Unknown,
            label: label.into(),
            name: None,
            house_number: None,
            street: None,
            city: None,
            state: None,
            postcode: None,
            country: None,
        }
    }
}
