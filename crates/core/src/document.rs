//! Article listings about a disease

use serde::{Deserialize, Serialize};

use crate::lenient;

/// One article suggested by the model
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub source: Option<String>,
}

/// Shape the documents prompt asks the model to answer in
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentPayload {
    #[serde(default)]
    pub documents: Option<Vec<Document>>,
}

/// Result of a document lookup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentResponse {
    pub success: bool,
    pub disease: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<Document>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentResponse {
    pub fn found(disease: &str, documents: Vec<Document>) -> Self {
        Self {
            success: true,
            disease: disease.to_string(),
            documents: Some(documents),
            error: None,
        }
    }

    pub fn failed(disease: &str, error: String) -> Self {
        Self {
            success: false,
            disease: disease.to_string(),
            documents: None,
            error: Some(error),
        }
    }
}
