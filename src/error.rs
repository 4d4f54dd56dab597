//! API error type and its JSON rendering.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::gateways::PdfError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors returned by the HTTP handlers.
///
/// | Variant | Status |
/// |---|---|
/// | `Validation` | 400 |
/// | `MethodNotAllowed` | 405 |
/// | `PayloadTooLarge` | 413 |
/// | `Unprocessable` | 422 |
/// | `Upstream` | 502 |
/// | `Internal` | 500 |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("Only POST requests allowed")]
    MethodNotAllowed,
    #[error("{message}")]
    PayloadTooLarge { message: String, details: Value },
    #[error("{message}")]
    Unprocessable { message: String, details: Value },
    #[error("{message}")]
    Upstream { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn unprocessable(message: impl Into<String>, details: Value) -> Self {
        Self::Unprocessable {
            message: message.into(),
            details,
        }
    }
    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, details) = match self {
            AppError::Validation { details, .. } => ("validation_error", details.clone()),
            AppError::MethodNotAllowed => ("method_not_allowed", json!({ "allow": ["POST"] })),
            AppError::PayloadTooLarge { details, .. } => ("payload_too_large", details.clone()),
            AppError::Unprocessable { details, .. } => ("unprocessable", details.clone()),
            AppError::Upstream { details, .. } => ("upstream_error", details.clone()),
            AppError::Internal { details, .. } => ("internal_error", details.clone()),
        };

        ErrorInfo {
            code,
            message: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        let mut response = (status, Json(body)).into_response();
        if matches!(self, AppError::MethodNotAllowed) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }
        response
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Invalid request body", details)
    }
}

impl From<PdfError> for AppError {
    fn from(err: PdfError) -> Self {
        let reason = match &err {
            PdfError::Encrypted => "encrypted",
            PdfError::Unreadable(_) => "unreadable",
        };
        AppError::unprocessable(
            "Failed to extract PDF",
            json!({ "reason": reason, "error": err.to_string() }),
        )
    }
}
