//! Address suggestion handler
//!
//! Identical queries are safe to cache briefly, so successful responses
//! advertise short-TTL shared-cache headers.

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::state::AppState;

/// Cache policy for successful suggestion responses
const SUGGEST_CACHE_CONTROL: &str = "public, s-maxage=60, stale-while-revalidate=300";

/// Query parameters for the suggest endpoint
#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    /// Free-text address query
    pub q: Option<String>,
}

/// Response envelope for the suggest endpoint
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    /// Whether the lookup succeeded
    pub ok: bool,
    /// Ranked suggestion labels (present when `ok`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    /// Error message (present when not `ok`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SuggestResponse {
    fn success(suggestions: Vec<String>) -> Self {
        Self {
            ok: true,
            suggestions: Some(suggestions),
            error: None,
        }
    }

    fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            suggestions: None,
            error: Some(error.into()),
        }
    }
}

/// Suggest addresses for a free-text query
///
/// GET /v1/locations/suggest?q=...
///
/// Queries shorter than 3 trimmed characters return an empty list without
/// any provider call. Hard provider faults come back as `ok: false` with a
/// 200 status so caller UIs can render the message.
#[instrument(skip(state))]
pub async fn suggest(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Response {
    let Some(query) = params.q else {
        return (
            StatusCode::OK,
            [(header::CACHE_CONTROL, "no-store")],
            Json(SuggestResponse::failure(
                "missing required query parameter 'q'",
            )),
        )
            .into_response();
    };

    match state.geocoding.suggest(&query).await {
        Ok(suggestions) => (
            StatusCode::OK,
            [(header::CACHE_CONTROL, SUGGEST_CACHE_CONTROL)],
            Json(SuggestResponse::success(suggestions)),
        )
            .into_response(),
        Err(e) => {
            warn!(%query, error = %e, "Suggestion lookup failed");
            (
                StatusCode::OK,
                [(header::CACHE_CONTROL, "no-store")],
                Json(SuggestResponse::failure(e.to_string())),
            )
                .into_response()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let response = SuggestResponse::success(vec!["123 Main St".to_string()]);
        let json = serde_json::to_string(&response).expect("serialize");
        assert!(json.contains(r#""ok":true"#));
        assert!(json.contains("123 Main St"));
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_empty_success_keeps_suggestions_field() {
        let response = SuggestResponse::success(vec![]);
        let json = serde_json::to_string(&response).expect("serialize");
        assert!(json.contains(r#""suggestions":[]"#));
    }

    #[test]
    fn test_failure_envelope_shape() {
        let response = SuggestResponse::failure("upstream exploded");
        let json = serde_json::to_string(&response).expect("serialize");
        assert!(json.contains(r#""ok":false"#));
        assert!(json.contains("upstream exploded"));
        assert!(!json.contains("suggestions"));
    }
}
