//! Candidate ranking engine
//!
//! Pure functions: classify candidates into specificity tiers, compose
//! display labels, order by tier (stable within a tier), deduplicate exact
//! labels, and cap the result. No I/O.

use std::collections::HashSet;

use domain::{SpecificityTier, Suggestion};

use crate::models::{Candidate, PlaceKind};

/// Classify a candidate into a specificity tier
///
/// House-number presence always wins, whatever the provider called the
/// result; the kind hint settles the rest.
#[must_use]
pub fn classify(candidate: &Candidate) -> SpecificityTier {
    if candidate.house_number.is_some() || candidate.kind == PlaceKind::Address {
        return SpecificityTier::Address;
    }
    if candidate.kind == PlaceKind::Street {
        return SpecificityTier::Street;
    }
    SpecificityTier::Other
}

/// Compose the display label for a candidate
///
/// With a house number and street present the label is assembled from the
/// parts actually available: `"{number} {street}, {city}, {state},
/// {postcode}, {country}"`, empty parts omitted. Otherwise the best single
/// descriptor wins: name, then street, then the provider's raw label.
#[must_use]
pub fn compose_label(candidate: &Candidate) -> String {
    if let (Some(number), Some(street)) = (&candidate.house_number, &candidate.street) {
        let mut parts = vec![format!("{number} {street}")];
        for part in [
            &candidate.city,
            &candidate.state,
            &candidate.postcode,
            &candidate.country,
        ] {
            if let Some(value) = part {
                if !value.trim().is_empty() {
                    parts.push(value.clone());
                }
            }
        }
        return parts.join(", ");
    }

    candidate
        .name
        .as_ref()
        .or(candidate.street.as_ref())
        .filter(|s| !s.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| candidate.label.clone())
}

/// Order candidates by tier descending, preserving provider order within a tier
#[must_use]
pub fn order(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    // sort_by_key is stable, so provider order survives within a tier
    candidates.sort_by_key(|c| std::cmp::Reverse(classify(c).rank()));
    candidates
}

/// Rank candidates into deduplicated, capped suggestions
#[must_use]
pub fn rank(candidates: &[Candidate], cap: usize) -> Vec<Suggestion> {
    let ordered = order(candidates.to_vec());

    let mut seen = HashSet::new();
    let mut suggestions = Vec::new();
    for candidate in &ordered {
        let label = compose_label(candidate);
        if label.is_empty() || !seen.insert(label.clone()) {
            continue;
        }
        suggestions.push(Suggestion::new(label, classify(candidate)));
        if suggestions.len() == cap {
            break;
        }
    }
    suggestions
}
