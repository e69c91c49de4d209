//! Assistant endpoints (chat, documents, graphics)

use axum::{
    Extension, Json,
    extract::{Path, rejection::JsonRejection},
};
use medassist_core::{ChatMessage, DocumentResponse, GraphicsResponse};
use serde::Deserialize;

use crate::ai::Assistant;
use crate::error::AppError;

/// Request body for chat
#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(alias = "content")]
    message: String,
}

/// POST /api/chat — Answer a health question
pub async fn chat(
    Extension(assistant): Extension<Option<Assistant>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatMessage>, AppError> {
    let assistant = assistant.ok_or(AppError::LlmUnavailable)?;
    let Json(body) = payload?;

    if body.message.trim().is_empty() {
        return Err(AppError::BadRequest("message must not be empty".to_string()));
    }

    tracing::info!(chars = body.message.chars().count(), "Chat request");

    let reply = assistant.chat(&body.message).await?;
    Ok(Json(reply))
}

/// GET /api/documents/{disease} — Articles about a disease
///
/// Model and parse failures are reported in the body with `success: false`.
pub async fn documents(
    Extension(assistant): Extension<Option<Assistant>>,
    Path(disease): Path<String>,
) -> Result<Json<DocumentResponse>, AppError> {
    let assistant = assistant.ok_or(AppError::LlmUnavailable)?;
    let disease = disease_name(&disease)?;

    tracing::info!(disease, "Document request");

    Ok(Json(assistant.documents(disease).await))
}

/// GET /api/graphics/{disease} — Chart data about a disease
///
/// Runs seven model calls in sequence; partial data is returned with
/// `success: false` when one of them fails.
pub async fn graphics(
    Extension(assistant): Extension<Option<Assistant>>,
    Path(disease): Path<String>,
) -> Result<Json<GraphicsResponse>, AppError> {
    let assistant = assistant.ok_or(AppError::LlmUnavailable)?;
    let disease = disease_name(&disease)?;

    tracing::info!(disease, "Graphics request");

    Ok(Json(assistant.graphics(disease).await))
}

fn disease_name(raw: &str) -> Result<&str, AppError> {
    let disease = raw.trim();
    if disease.is_empty() {
        return Err(AppError::BadRequest("disease must not be empty".to_string()));
    }
    Ok(disease)
}
