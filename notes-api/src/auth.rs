use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response
};
use std::sync::Arc;

use crate::config::AuthConfig;
use crate::errors::NotesApiError;
use crate::telemetry::Telemetry;

pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Clone)]
pub struct AuthState {
    pub api_key: Option<String>
}

impl AuthState {
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            api_key: config.api_key.clone().filter(|key| !key.is_empty())
        }
    }

    pub fn enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Returns `true` when no key is configured or the header carries it.
    pub fn authorize(&self, headers: &HeaderMap) -> bool {
        let Some(expected) = &self.api_key else {
            return true;
        };

        headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|provided| provided == expected.as_str())
    }
}

pub async fn api_key_middleware(
    State(state): State<Arc<AuthState>>,
    request: Request,
    next: Next
) -> Result<Response, NotesApiError> {
    if state.authorize(request.headers()) {
        return Ok(next.run(request).await);
    }

    tracing::warn!(path = %request.uri().path(), "Rejected request with invalid API key");
    Telemetry::record_outcome("unauthorized");
    Err(NotesApiError::Unauthorized)
}
