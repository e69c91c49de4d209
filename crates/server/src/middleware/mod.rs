//! HTTP middleware

pub mod audit;
pub mod auth;
pub mod metrics;
pub mod request_id;

pub use audit::audit_middleware;
pub use auth::ApiKeyAuth;
pub use self::metrics::metrics_middleware;
pub use request_id::request_id_middleware;
