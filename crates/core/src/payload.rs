//! Cleanup and decoding of JSON payloads returned by the model

use serde::de::DeserializeOwned;

use crate::error::DecodeError;

/// Remove a leading fence marker (three backticks, optionally tagged `json`)
/// and a trailing fence marker, trimming whitespace around the result.
///
/// Text without fences is only trimmed.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();

    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);

    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Strip code fences from `raw` and deserialize the remainder as `T`
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, DecodeError> {
    let payload = strip_code_fence(raw);
    if payload.is_empty() {
        return Err(DecodeError::Empty);
    }

    serde_json::from_str(payload).map_err(|source| DecodeError::Json {
        source,
        payload: payload.to_string(),
    })
}
