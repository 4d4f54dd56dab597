//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::fetch::Fetch;
use crate::state::AppState;

/// Returns service health status with the GitHub API check.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: GitHub API reachable with the configured token
/// - **503 Service Unavailable**: GitHub API unreachable or rejecting the token
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "github": {
///       "status": "ok",
///       "message": "Rate limit: 4987/5000 remaining"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let github_check = check_github(&state).await;
    let healthy = github_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            github: github_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Queries the rate limit endpoint, which costs no quota.
async fn check_github(state: &AppState) -> CheckStatus {
    match state.github.get_rate_limit().await {
        Fetch::Found(limits) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "Rate limit: {}/{} remaining",
                limits.rate.remaining, limits.rate.limit
            )),
        },
        Fetch::Absent => CheckStatus {
            status: "error".to_string(),
            message: Some("GitHub API unreachable".to_string()),
        },
        Fetch::Failed(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(e.to_string()),
        },
    }
}
