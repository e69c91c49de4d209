//! Health check endpoint

use axum::{Extension, Json};
use serde::Serialize;

use crate::ai::Assistant;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    /// Whether the assistant endpoints can reach a model provider
    llm: &'static str,
}

/// GET /health - Report liveness and whether a model provider is configured
pub async fn check(Extension(assistant): Extension<Option<Assistant>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        llm: if assistant.is_some() {
            "configured"
        } else {
            "disabled"
        },
    })
}
