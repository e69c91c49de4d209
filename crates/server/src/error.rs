//! Application error handling

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use medassist_core::ErrorBody;

use crate::ai::LlmError;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    /// No chat completion provider is configured
    LlmUnavailable,
    /// The chat completion provider failed
    Upstream(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::bad_request(&msg)),
            AppError::LlmUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorBody::llm_unavailable("OPENAI_API_KEY not configured"),
            ),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, ErrorBody::upstream(&msg)),
        };

        (status, Json(body)).into_response()
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
