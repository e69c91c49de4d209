//! Prometheus metrics collection middleware
//!
//! Records `http_requests_total` (counter) and `http_request_duration_seconds`
//! (histogram) for every request, with method/path/status labels.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Routes whose last segment is a free-form disease name
const DISEASE_ROUTES: [&str; 2] = ["documents", "graphics"];

/// Normalize request paths to avoid high-cardinality labels.
/// Collapses the disease segment of `/api/{documents,graphics}/{disease}`
/// into `:disease` so all lookups share one label.
fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').collect();
    match segments.as_slice() {
        ["", "api", route, _disease] if DISEASE_ROUTES.contains(route) => {
            format!("/api/{route}/:disease")
        }
        _ => path.to_string(),
    }
}

/// Middleware that records request count and duration metrics.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = normalize_path(request.uri().path());

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed().as_secs_f64();

    let status = response.status().as_u16().to_string();

    metrics::counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status
    )
    .increment(1);

    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path
    )
    .record(duration);

    response
}

#[cfg(test)]
mod tests {
    use super::normalize_path;

    #[test]
    fn collapses_disease_segment() {
        assert_eq!(normalize_path("/api/documents/Diyabet"), "/api/documents/:disease");
        assert_eq!(
            normalize_path("/api/graphics/Beh%C3%A7et"),
            "/api/graphics/:disease"
        );
    }

    #[test]
    fn leaves_other_paths_alone() {
        assert_eq!(normalize_path("/api/chat"), "/api/chat");
        assert_eq!(normalize_path("/health"), "/health");
        assert_eq!(normalize_path("/api/other/x"), "/api/other/x");
    }
}
