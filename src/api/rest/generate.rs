//! Generate endpoint - encode content and render the QR image

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::render::{RenderError, RenderOptions};
use crate::types::{EncodedContent, Payload, TypeTag};

/// Body for POST /api/generate-qr
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(rename = "type", default)]
    pub type_tag: Option<String>,
    /// Older clients send this as `content`
    #[serde(default, alias = "content")]
    pub payload: Value,
    #[serde(default)]
    pub options: Option<RenderOptions>,
}

/// Response for POST /api/generate-qr
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub filename: String,
    pub url: String,
    pub content: EncodedContent,
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
}

/// POST /api/generate-qr - Validate, encode and render
///
/// Validation failures are rejected before the renderer is touched.
pub async fn generate_qr(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = body?;
    let type_name = request.type_tag.as_deref().unwrap_or_default();

    let payload = Payload::parse(type_name, &request.payload).map_err(|e| {
        warn!(type_tag = %type_name, error = %e, "rejected generate request");
        e
    })?;
    let settings = request.options.unwrap_or_default().resolve()?;

    let type_tag = payload.type_tag();
    let content = payload.encode();

    let renderer = Arc::clone(&state.renderer);
    let text = content.as_str().to_owned();
    let rendered = tokio::task::spawn_blocking(move || renderer.render(&text, &settings))
        .await
        .map_err(|e| RenderError::Task(e.to_string()))??;

    info!(type_tag = %type_tag, filename = %rendered.filename, "generated QR code");

    Ok(Json(GenerateResponse {
        success: true,
        url: format!("/images/{}", rendered.filename),
        filename: rendered.filename,
        content,
        type_tag,
    }))
}
