//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`           - Health check: GitHub API reachability (public)
//! - `POST /api/extract`      - PDF link extraction
//! - `POST /api/github-data`  - Link enrichment
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api` (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
/// - `max_upload_bytes` - request body cap for PDF uploads
pub fn app_router(
    state: AppState,
    behind_proxy: bool,
    max_upload_bytes: usize,
) -> NormalizePath<Router> {
    let api_router =
        api::routes::api_routes(max_upload_bytes).layer(rate_limit::layer(behind_proxy));

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
