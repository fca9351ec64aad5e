//! History endpoints

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::WindowParams;
use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::encoder::ValidationError;
use crate::types::{EncodedContent, HistoryRecord, RecordContent, TypeTag, HISTORY_WINDOW};

/// GET /api/history - Most recent records, oldest first
///
/// Reloads the snapshot so records written by other processes are visible.
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    query: Result<Query<WindowParams>, QueryRejection>,
) -> Result<Json<Vec<HistoryRecord>>, ApiError> {
    let Query(params) = query?;
    let n = params.window(HISTORY_WINDOW, state.history.max_retained());
    Ok(Json(state.history.recent(n)))
}

/// Body for POST /api/save-to-history
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub content: Value,
    #[serde(rename = "type", default)]
    pub type_tag: String,
    /// ISO-8601; offset-less values are UTC. Defaults to the time of the request
    #[serde(default, deserialize_with = "crate::types::timestamp::deserialize_option")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl SaveRequest {
    fn into_record(self) -> Result<HistoryRecord, ValidationError> {
        let filename = self.filename.trim();
        if filename.is_empty() {
            return Err(ValidationError::MissingField("filename".to_string()));
        }

        let type_name = self.type_tag.trim();
        if type_name.is_empty() {
            return Err(ValidationError::MissingField("type".to_string()));
        }
        let type_tag: TypeTag = type_name
            .parse()
            .map_err(|_| ValidationError::InvalidType(type_name.to_string()))?;

        let content = match self.content {
            Value::Null => return Err(ValidationError::MissingField("content".to_string())),
            Value::String(s) => RecordContent::Encoded(EncodedContent::new(s)),
            other => RecordContent::Structured(other),
        };

        Ok(HistoryRecord {
            filename: filename.to_string(),
            content,
            type_tag,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
        })
    }
}

/// Acknowledgement for POST /api/save-to-history
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
}

/// POST /api/save-to-history - Append a record to the history log
///
/// A failed snapshot write is reported as a 500; nothing is retained.
pub async fn save_to_history(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    let Json(request) = body?;
    let record = request.into_record()?;

    let history = Arc::clone(&state.history);
    tokio::task::spawn_blocking(move || history.append(record))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(SaveResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: Value) -> SaveRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_into_record() {
        let record = request(json!({
            "filename": "qr_1.png",
            "content": "mailto:a@b.co",
            "type": "email",
            "timestamp": "2024-03-01T12:00:00.000Z"
        }))
        .into_record()
        .unwrap();

        assert_eq!(record.filename, "qr_1.png");
        assert_eq!(record.type_tag, TypeTag::Email);
        assert_eq!(record.timestamp.to_rfc3339(), "2024-03-01T12:00:00+00:00");
    }

    #[test]
    fn test_accepts_local_iso_timestamp() {
        let record = request(json!({
            "filename": "qr_1.png",
            "content": "hello",
            "type": "text",
            "timestamp": "2024-06-01T10:00:00"
        }))
        .into_record()
        .unwrap();

        assert_eq!(record.timestamp.to_rfc3339(), "2024-06-01T10:00:00+00:00");
    }

    #[test]
    fn test_malformed_timestamp_is_rejected() {
        let parsed = serde_json::from_value::<SaveRequest>(json!({
            "filename": "f", "content": "x", "type": "text", "timestamp": "soon"
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_timestamp_defaults_to_now() {
        let before = Utc::now();
        let record = request(json!({"filename": "f", "content": "x", "type": "text"}))
            .into_record()
            .unwrap();
        assert!(record.timestamp >= before);
    }

    #[test]
    fn test_rejects_incomplete_records() {
        assert_eq!(
            request(json!({"content": "x", "type": "text"})).into_record(),
            Err(ValidationError::MissingField("filename".to_string()))
        );
        assert_eq!(
            request(json!({"filename": "f", "content": "x", "type": "qr"})).into_record(),
            Err(ValidationError::InvalidType("qr".to_string()))
        );
        assert_eq!(
            request(json!({"filename": "f", "type": "text"})).into_record(),
            Err(ValidationError::MissingField("content".to_string()))
        );
    }
}
