//! API key authentication for the assistant routes

use axum::{
    Json,
    body::Body,
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use medassist_core::ErrorBody;

/// Header carrying the client's API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// API Key authentication state
#[derive(Clone)]
pub struct ApiKeyAuth {
    api_key: Option<String>,
}

impl ApiKeyAuth {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    /// Whether the request headers satisfy the configured key.
    /// Always true when no key is configured.
    pub fn accepts(&self, headers: &HeaderMap) -> bool {
        match &self.api_key {
            None => true,
            Some(expected) => headers
                .get(API_KEY_HEADER)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|provided| provided == expected),
        }
    }
}

/// Reject requests without a valid `X-API-Key` header
pub async fn auth_middleware(request: Request<Body>, next: Next) -> Response {
    let allowed = request
        .extensions()
        .get::<ApiKeyAuth>()
        .is_none_or(|auth| auth.accepts(request.headers()));

    if !allowed {
        tracing::warn!(path = %request.uri().path(), "Rejected request with missing or invalid API key");
        let body = ErrorBody::unauthorized("Missing or invalid API key");
        return (StatusCode::UNAUTHORIZED, Json(body)).into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(key: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(key) = key {
            headers.insert(API_KEY_HEADER, key.parse().unwrap());
        }
        headers
    }

    #[test]
    fn open_when_no_key_configured() {
        let auth = ApiKeyAuth::new(None);
        assert!(auth.accepts(&headers(None)));
        assert!(auth.accepts(&headers(Some("anything"))));
    }

    #[test]
    fn requires_matching_key() {
        let auth = ApiKeyAuth::new(Some("secret".into()));
        assert!(auth.accepts(&headers(Some("secret"))));
        assert!(!auth.accepts(&headers(Some("wrong"))));
        assert!(!auth.accepts(&headers(None)));
    }
}
