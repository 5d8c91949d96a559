//! Itinerary planning handler

use axum::{Json, extract::State};
use domain::Itinerary;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::state::AppState;

/// Request body for planning an itinerary
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    /// Ordered stops, 2 to 12 non-empty entries after trimming
    #[serde(default)]
    pub addresses: Vec<String>,
}

/// Response envelope for the plan endpoint
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    /// Whether planning succeeded
    pub ok: bool,
    /// The planned itinerary (present when `ok`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Itinerary>,
    /// Error message (present when not `ok`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlanResponse {
    fn success(itinerary: Itinerary) -> Self {
        Self {
            ok: true,
            data: Some(itinerary),
            error: None,
        }
    }

    fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Plan a multi-stop driving itinerary
///
/// POST /v1/itineraries
///
/// Validation and provider failures are surfaced as `ok: false` with a
/// 200 status so caller UIs can render the message instead of treating it
/// as a transport error. The error text names the failing stage (geocoding
/// vs. routing) and, where available, the responsible address.
#[instrument(skip(state, request), fields(stops = request.addresses.len()))]
pub async fn plan(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Json<PlanResponse> {
    match state.itinerary.plan(&request.addresses).await {
        Ok(itinerary) => Json(PlanResponse::success(itinerary)),
        Err(e) => {
            info!(error = %e, "Plan request failed");
            Json(PlanResponse::failure(e.to_string()))
        },
    }
}

#[cfg(test)]
mod tests {
    use domain::{Coordinate, Segment};

    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let itinerary = Itinerary::new(
            vec!["A".to_string(), "B".to_string()],
            vec![
                Coordinate::new_unchecked(0.0, 0.0),
                Coordinate::new_unchecked(1.0, 1.0),
            ],
            vec![Segment::new(1000.0, 60.0, "osrm", serde_json::Value::Null)],
        )
        .expect("valid itinerary");

        let json = serde_json::to_string(&PlanResponse::success(itinerary)).expect("serialize");
        assert!(json.contains(r#""ok":true"#));
        assert!(json.contains("total_distance_meters"));
        assert!(json.contains("total_miles"));
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_failure_envelope_shape() {
        let json =
            serde_json::to_string(&PlanResponse::failure("too many stops")).expect("serialize");
        assert!(json.contains(r#""ok":false"#));
        assert!(json.contains("too many stops"));
        assert!(!json.contains("data"));
    }

    #[test]
    fn test_request_tolerates_missing_addresses_field() {
        let request: PlanRequest = serde_json::from_str("{}").expect("deserialize");
        assert!(request.addresses.is_empty());
    }
}
