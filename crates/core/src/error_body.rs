use serde::{Deserialize, Serialize};

/// JSON body returned for HTTP-level failures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Machine-readable error kind
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("bad_request", message)
    }

    pub fn unauthorized(message: &str) -> Self {
        Self::new("unauthorized", message)
    }

    pub fn llm_unavailable(message: &str) -> Self {
        Self::new("llm_unavailable", message)
    }

    pub fn upstream(message: &str) -> Self {
        Self::new("upstream_error", message)
    }
}
