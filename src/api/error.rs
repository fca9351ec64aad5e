//! API error types and response formatting.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::encoder::ValidationError;
use crate::history::StoreError;
use crate::render::RenderError;

/// API error type that converts to appropriate HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Body could not be parsed.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The QR symbol or image could not be produced.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The history snapshot could not be written.
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// No route matched.
    #[error("route not found")]
    NotFound,

    /// Anything else, e.g. a panicking handler.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// JSON error response body.
#[derive(Debug, Clone, Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Render(_) | Self::Storage(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (error, message) = match &self {
            Self::Validation(err) => ("bad_request", err.to_string()),
            Self::BadRequest(msg) => ("bad_request", msg.clone()),
            Self::NotFound => ("not_found", "Route not found".to_string()),
            Self::Render(err) => {
                tracing::error!(error = %err, "QR generation error");
                ("render_failed", "Failed to generate QR code".to_string())
            }
            Self::Storage(err) => {
                tracing::error!(error = %err, "history storage error");
                ("storage_failed", "Failed to save to history".to_string())
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                ("internal_error", "Something went wrong!".to_string())
            }
        };

        let body = ErrorResponse { error, message };

        (self.status(), Json(body)).into_response()
    }
}
