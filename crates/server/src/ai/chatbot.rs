//! Free-form health questions

use medassist_core::ChatMessage;

use super::client::{ChatBackend, LlmError};
use super::prompts;

/// Answer a user's health question with a new bot message
pub async fn reply(backend: &dyn ChatBackend, message: &str) -> Result<ChatMessage, LlmError> {
    let content = backend.complete(prompts::CHAT.request(message)).await?;
    Ok(ChatMessage::bot(content))
}
