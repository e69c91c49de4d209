use thiserror::Error;

/// Failure to turn model text into a typed value
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("model returned an empty payload")]
    Empty,

    #[error("{source}")]
    Json {
        #[source]
        source: serde_json::Error,
        /// The payload after fence stripping, kept for error reports
        payload: String,
    },
}

impl DecodeError {
    /// The cleaned payload that failed to decode (empty for `Empty`)
    pub fn payload(&self) -> &str {
        match self {
            DecodeError::Empty => "",
            DecodeError::Json { payload, .. } => payload,
        }
    }
}
