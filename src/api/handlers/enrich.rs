//! Handler for the link enrichment endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;
use validator::Validate;

use crate::api::dto::enrich::EnrichRequest;
use crate::domain::entities::EnrichedRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves platform links into profile and repository records.
///
/// # Endpoint
///
/// `POST /api/github-data`
///
/// # Request Body
///
/// ```json
/// { "links": ["https://github.com/alice", "https://github.com/alice/project"] }
/// ```
///
/// Links that are not profile or repository references are skipped.
/// Records come back in input order; references that fail to resolve are
/// left out.
///
/// # Errors
///
/// - **400 Bad Request**: missing, empty, or oversized `links`
/// - **502 Bad Gateway**: none of the references could be resolved
pub async fn enrich_handler(
    State(state): State<AppState>,
    payload: Result<Json<EnrichRequest>, JsonRejection>,
) -> Result<Json<Vec<EnrichedRecord>>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "No links provided",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    if payload.links.is_empty() {
        return Err(AppError::bad_request("No links provided", json!({})));
    }

    payload.validate()?;

    let records = state.enrichment_service.enrich(&payload.links).await?;

    Ok(Json(records))
}
