//! Fallback for non-POST requests to the API endpoints.

use crate::error::AppError;

/// Rejects every method other than `POST` with `405` and an `Allow: POST` header.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
