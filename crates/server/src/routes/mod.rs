pub mod assistant;
pub mod health;
pub mod metrics;

use axum::{
    Router,
    routing::{get, post},
};

/// Build assistant routes, mounted under `/api`
pub fn api_routes() -> Router {
    Router::new()
        .route("/chat", post(assistant::chat))
        .route("/documents/{disease}", get(assistant::documents))
        .route("/graphics/{disease}", get(assistant::graphics))
}
