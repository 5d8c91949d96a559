//! Ranked address suggestion value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// How specific a geocoded candidate is
///
/// Ordering matters: `Address` outranks `Street`, which outranks `Other`.
/// Variant order is ascending so the derived `Ord` agrees with `rank()`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SpecificityTier {
    /// City, region, POI-only, or otherwise unclassified match
    Other,
    /// Street/road-level match without a house number
    Street,
    /// House-number or full-address match
    Address,
}

impl SpecificityTier {
    /// Numeric rank, higher = more specific
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Address => 3,
            Self::Street => 2,
            Self::Other => 1,
        }
    }
}

impl fmt::Display for SpecificityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address => write!(f, "address"),
            Self::Street => write!(f, "street"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A single human-readable address suggestion
///
/// Ephemeral: computed per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    label: String,
    tier: SpecificityTier,
}

impl Suggestion {
    /// Create a new suggestion
    #[must_use]
    pub fn new(label: impl Into<String>, tier: SpecificityTier) -> Self {
        Self {
            label: label.into(),
            tier,
        }
    }

    /// The display label shown to the user
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The specificity tier this suggestion was classified into
    #[must_use]
    pub const fn tier(&self) -> SpecificityTier {
        self.tier
    }

    /// Whether the label contains an ASCII digit
    ///
    /// Used as the "house-number-level result present" heuristic when
    /// deciding whether enrichment is worth a call.
    #[must_use]
    pub fn has_digit(&self) -> bool {
        self.label.bytes().any(|b| b.is_ascii_digit())
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
