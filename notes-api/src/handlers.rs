//! HTTP request handlers.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse
};
use lecture_notes::{NotesResult, generate_notes_with};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::errors::{NotesApiError, NotesApiResult};
use crate::state::AppState;
use crate::telemetry::{RequestTimer, Telemetry};

pub const LIVENESS_MESSAGE: &str = "Lecture notes service is running";

/// A validated `POST /api/process` body.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRequest {
    pub prompt: String,
    /// Echoed back verbatim. `None` means the field was absent.
    pub note_id: Option<Value>,
    pub timestamp: Option<Value>
}

impl ProcessRequest {
    /// Parses a raw body. Anything other than a JSON object with a non-empty
    /// string `prompt` is rejected.
    pub fn parse(body: &[u8]) -> NotesApiResult<Self> {
        let Ok(Value::Object(mut fields)) = serde_json::from_slice::<Value>(body) else {
            return Err(NotesApiError::InvalidRequest);
        };

        let prompt = match fields.remove("prompt") {
            Some(Value::String(prompt)) if !prompt.is_empty() => prompt,
            _ => return Err(NotesApiError::InvalidRequest)
        };

        Ok(Self {
            prompt,
            note_id: fields.remove("note_id"),
            timestamp: fields.remove("timestamp")
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub status: &'static str,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,
    pub data: NotesResult
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String
}

/// GET /
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339()
    })
}

/// GET /metrics
pub async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .unwrap_or_default();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body
    )
}

/// POST /api/process
///
/// Runs the notes pipeline on the blocking pool and wraps the result in the
/// success envelope.
pub async fn process_notes(
    State(state): State<Arc<AppState>>,
    body: Bytes
) -> NotesApiResult<Json<ProcessResponse>> {
    let request = ProcessRequest::parse(&body).inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected notes request");
        Telemetry::record_outcome(e.outcome());
    })?;

    let ProcessRequest {
        prompt,
        note_id,
        timestamp
    } = request;
    let limits = state.limits;
    let prompt_chars = prompt.chars().count();
    let timer = RequestTimer::new();

    let notes = tokio::task::spawn_blocking(move || generate_notes_with(&prompt, &limits))
        .await
        .map_err(NotesApiError::from)
        .inspect_err(|e| Telemetry::record_outcome(e.outcome()))?;

    let elapsed_ms = timer.finish();
    Telemetry::record_outcome("success");
    Telemetry::record_sentences(notes.raw_sentence_count);

    tracing::info!(
        prompt_chars,
        sentences = notes.raw_sentence_count,
        elapsed_ms,
        "Lecture notes generated"
    );

    Ok(Json(ProcessResponse {
        status: "success",
        message: "Lecture notes generated",
        note_id,
        timestamp,
        data: notes
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_valid_body() {
        let request =
            ProcessRequest::parse(br#"{"prompt": "Text here", "note_id": 7, "timestamp": null}"#)
                .unwrap();
        assert_eq!(request.prompt, "Text here");
        assert_eq!(request.note_id, Some(json!(7)));
        assert_eq!(request.timestamp, Some(Value::Null));
    }

    #[test]
    fn test_parse_absent_optional_fields() {
        let request = ProcessRequest::parse(br#"{"prompt": "Text here"}"#).unwrap();
        assert!(request.note_id.is_none());
        assert!(request.timestamp.is_none());
    }

    #[test]
    fn test_parse_rejects_bad_prompts() {
        let bodies: [&[u8]; 8] = [
            br#"{}"#,
            br#"{"prompt": ""}"#,
            br#"{"prompt": 42}"#,
            br#"{"prompt": null}"#,
            br#"{"prompt": ["a"]}"#,
            br#"["prompt"]"#,
            b"not json at all",
            b""
        ];
        for body in bodies {
            assert!(
                matches!(
                    ProcessRequest::parse(body),
                    Err(NotesApiError::InvalidRequest)
                ),
                "body should be rejected: {}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_response_omits_absent_echo_fields() {
        let response = ProcessResponse {
            status: "success",
            message: "Lecture notes generated",
            note_id: None,
            timestamp: Some(json!("2024-01-01T00:00:00Z")),
            data: lecture_notes::generate_notes("")
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("note_id").is_none());
        assert_eq!(json["timestamp"], "2024-01-01T00:00:00Z");
        assert_eq!(json["data"]["topic"], "Lecture Topic");
    }
}
