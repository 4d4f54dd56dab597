//! Handler for the PDF link extraction endpoint.

use axum::{
    Json,
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
};
use serde_json::json;
use tracing::{info, warn};

use crate::api::dto::extract::{ExtractResponse, UPLOAD_FIELD};
use crate::error::AppError;
use crate::state::AppState;

/// Extracts platform links from an uploaded PDF.
///
/// # Endpoint
///
/// `POST /api/extract` with a `multipart/form-data` body whose `file` field
/// carries the PDF.
///
/// # Response
///
/// ```json
/// {
///   "message": "PDF processed successfully",
///   "pages": 2,
///   "urls": ["https://github.com/alice", "https://github.com/alice/project"],
///   "textSnippet": "Alice Example\nSoftware Engineer..."
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: body is not multipart, or the `file` field is missing or empty
/// - **413 Payload Too Large**: upload exceeds `MAX_UPLOAD_BYTES`
/// - **422 Unprocessable Entity**: the upload is not a readable PDF
pub async fn extract_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractResponse>, AppError> {
    let mut multipart = multipart.map_err(|rejection| {
        AppError::bad_request(
            "Expected a multipart/form-data upload",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let bytes = read_upload(&mut multipart).await?;
    let size = bytes.len();

    let extraction = state
        .extraction_service
        .extract(bytes)
        .await
        .inspect_err(|e| warn!("PDF extraction failed ({} bytes): {}", size, e))?;

    info!(
        "Extracted {} platform links from {} pages",
        extraction.urls.len(),
        extraction.page_count
    );

    Ok(Json(extraction.into()))
}

/// Reads the bytes of the upload field, skipping any other form fields.
async fn read_upload(multipart: &mut Multipart) -> Result<Vec<u8>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error("Malformed multipart body", e))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| upload_error("Failed to read uploaded file", e))?;

        if data.is_empty() {
            return Err(AppError::bad_request(
                "Uploaded file is empty",
                json!({ "field": UPLOAD_FIELD }),
            ));
        }

        return Ok(data.to_vec());
    }

    Err(AppError::bad_request(
        "No file uploaded",
        json!({ "field": UPLOAD_FIELD }),
    ))
}

/// Maps a multipart failure, keeping `413` when the body limit was hit.
fn upload_error(message: &str, err: MultipartError) -> AppError {
    let details = json!({ "reason": err.body_text() });
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge {
            message: "Uploaded file exceeds the size limit".to_string(),
            details,
        }
    } else {
        AppError::bad_request(message, details)
    }
}
