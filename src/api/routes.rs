//! API route configuration.

use crate::api::handlers::{enrich_handler, extract_handler, method_not_allowed_handler};
use crate::state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /extract`     - Upload a PDF (multipart field `file`), get its platform links
/// - `POST /github-data` - Resolve links into profile and repository records
///
/// Any other method on these paths answers `405` with `Allow: POST`.
/// `max_upload_bytes` caps the request body of the upload endpoint.
pub fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/extract",
            post(extract_handler)
                .fallback(method_not_allowed_handler)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route(
            "/github-data",
            post(enrich_handler).fallback(method_not_allowed_handler),
        )
}
