//! Assistant features backed by a chat completion API

pub mod chatbot;
pub mod client;
pub mod documents;
pub mod graphics;
pub mod prompts;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use medassist_core::{ChatMessage, DocumentResponse, GraphicsResponse};

pub use client::{ChatBackend, LlmError, OpenAiClient};
pub use graphics::{RandomRates, RateSource};

/// Handle shared by the request handlers
#[derive(Clone)]
pub struct Assistant {
    backend: Arc<dyn ChatBackend>,
    rates: Arc<dyn RateSource>,
}

impl Assistant {
    pub fn new(backend: Arc<dyn ChatBackend>, rates: Arc<dyn RateSource>) -> Self {
        Self { backend, rates }
    }

    pub async fn chat(&self, message: &str) -> Result<ChatMessage, LlmError> {
        chatbot::reply(self.backend.as_ref(), message).await
    }

    pub async fn documents(&self, disease: &str) -> DocumentResponse {
        documents::find(self.backend.as_ref(), disease).await
    }

    pub async fn graphics(&self, disease: &str) -> GraphicsResponse {
        graphics::collect(self.backend.as_ref(), self.rates.as_ref(), disease).await
    }
}
