//! Article lookups for a disease

use medassist_core::{DocumentPayload, DocumentResponse, decode};

use super::client::ChatBackend;
use super::prompts;

/// Ask the model for articles about `disease`.
///
/// Never fails: call and decode errors are reported inside the response.
pub async fn find(backend: &dyn ChatBackend, disease: &str) -> DocumentResponse {
    let raw = match backend.complete(prompts::DOCUMENTS.request(disease)).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(disease, error = %e, "Document lookup failed");
            return DocumentResponse::failed(disease, format!("Error generating documents: {e}"));
        }
    };

    match decode::<DocumentPayload>(&raw) {
        Ok(payload) => {
            let documents = payload.documents.unwrap_or_default();
            tracing::info!(disease, count = documents.len(), "Documents generated");
            DocumentResponse::found(disease, documents)
        }
        Err(e) => {
            tracing::warn!(disease, error = %e, "Document payload did not parse");
            DocumentResponse::failed(
                disease,
                format!("JSON parsing error: {e}\nResponse was: {}", e.payload()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::testing::ScriptedBackend;

    #[tokio::test]
    async fn decodes_fenced_document_list() {
        let backend = ScriptedBackend::default().reply(
            &prompts::DOCUMENTS,
            "```json\n{\"documents\": [{\"title\": \"Diyabet Nedir?\", \"description\": \"Genel bakış\", \
             \"link\": \"https://www.who.int/diabetes\", \"source\": \"WHO\"}]}\n```",
        );

        let response = find(&backend, "Diyabet").await;

        assert!(response.success);
        assert_eq!(response.disease, "Diyabet");
        let docs = response.documents.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].source.as_deref(), Some("WHO"));
        assert_eq!(
            backend.calls.lock().unwrap()[0].user,
            "Diyabet hastalığı hakkında makaleler"
        );
    }

    #[tokio::test]
    async fn missing_documents_key_gives_empty_list() {
        let backend = ScriptedBackend::default().reply(&prompts::DOCUMENTS, "{}");
        let response = find(&backend, "grip").await;
        assert!(response.success);
        assert_eq!(response.documents, Some(vec![]));
    }

    #[tokio::test]
    async fn parse_failure_echoes_cleaned_payload() {
        let backend =
            ScriptedBackend::default().reply(&prompts::DOCUMENTS, "```\nBu konuda makale yok.\n```");

        let response = find(&backend, "et").await;

        assert!(!response.success);
        assert!(response.documents.is_none());
        let error = response.error.unwrap();
        assert!(error.starts_with("JSON parsing error: "));
        assert!(error.ends_with("\nResponse was: Bu konuda makale yok."));
    }

    #[tokio::test]
    async fn call_failure_is_reported() {
        let backend = ScriptedBackend::default().fail(&prompts::DOCUMENTS, "invalid api key");

        let response = find(&backend, "astım").await;

        assert!(!response.success);
        assert_eq!(response.disease, "astım");
        let error = response.error.unwrap();
        assert!(error.starts_with("Error generating documents: "));
        assert!(error.contains("invalid api key"));
    }
}
