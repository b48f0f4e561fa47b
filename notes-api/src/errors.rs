use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response}
};
use serde::Serialize;
use thiserror::Error;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized: Invalid API key";
pub const INVALID_PROMPT_MESSAGE: &str = "Missing or invalid 'prompt' field in request body";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error while generating notes";

#[derive(Error, Debug)]
pub enum NotesApiError {
    #[error("Unauthorized: Invalid API key")]
    Unauthorized,

    #[error("Missing or invalid 'prompt' field in request body")]
    InvalidRequest,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Server error: {0}")]
    Server(String)
}

/// JSON envelope returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String
}

impl NotesApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            NotesApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            NotesApiError::InvalidRequest => StatusCode::BAD_REQUEST,
            NotesApiError::Internal(_)
            | NotesApiError::Configuration(_)
            | NotesApiError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// Message safe to show to callers. Server-side detail is never included.
    pub fn public_message(&self) -> &'static str {
        match self {
            NotesApiError::Unauthorized => UNAUTHORIZED_MESSAGE,
            NotesApiError::InvalidRequest => INVALID_PROMPT_MESSAGE,
            NotesApiError::Internal(_)
            | NotesApiError::Configuration(_)
            | NotesApiError::Server(_) => INTERNAL_ERROR_MESSAGE
        }
    }

    /// Label used for the `outcome` metric dimension.
    pub fn outcome(&self) -> &'static str {
        match self {
            NotesApiError::Unauthorized => "unauthorized",
            NotesApiError::InvalidRequest => "invalid_request",
            NotesApiError::Internal(_)
            | NotesApiError::Configuration(_)
            | NotesApiError::Server(_) => "internal_error"
        }
    }
}

impl IntoResponse for NotesApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            status: "error",
            message: self.public_message().to_string()
        };

        (status, Json(body)).into_response()
    }
}

impl From<tokio::task::JoinError> for NotesApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        NotesApiError::Internal(err.to_string())
    }
}

pub type NotesApiResult<T> = Result<T, NotesApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            NotesApiError::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            NotesApiError::InvalidRequest.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            NotesApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            NotesApiError::Unauthorized.to_string(),
            "Unauthorized: Invalid API key"
        );
        assert_eq!(
            NotesApiError::Configuration("bad port".to_string()).to_string(),
            "Configuration error: bad port"
        );
    }

    #[tokio::test]
    async fn test_internal_detail_is_not_leaked() {
        let response =
            NotesApiError::Internal("regex state corrupted".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], INTERNAL_ERROR_MESSAGE);
        assert!(!json.to_string().contains("regex state"));
    }

    #[tokio::test]
    async fn test_panicked_task_maps_to_internal_envelope() {
        let join_error = tokio::task::spawn_blocking(|| -> usize { panic!("pipeline exploded") })
            .await
            .unwrap_err();

        let error = NotesApiError::from(join_error);
        assert!(matches!(error, NotesApiError::Internal(_)));
        assert_eq!(error.outcome(), "internal_error");

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({
                "status": "error",
                "message": "Internal server error while generating notes"
            })
        );
        assert!(!json.to_string().contains("exploded"));
    }

    #[tokio::test]
    async fn test_invalid_request_body() {
        let json = body_json(NotesApiError::InvalidRequest.into_response()).await;
        assert_eq!(
            json,
            serde_json::json!({
                "status": "error",
                "message": "Missing or invalid 'prompt' field in request body"
            })
        );
    }
}
