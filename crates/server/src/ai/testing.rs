//! Canned backends for unit tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::client::{ChatBackend, CompletionRequest, LlmError};
use super::graphics::RateSource;
use super::prompts::Prompt;

/// Answers each prompt with a scripted reply and records every request
#[derive(Default)]
pub struct ScriptedBackend {
    replies: HashMap<&'static str, Result<String, String>>,
    pub calls: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedBackend {
    pub fn reply(mut self, prompt: &Prompt, text: &str) -> Self {
        self.replies.insert(prompt.system, Ok(text.to_string()));
        self
    }

    pub fn fail(mut self, prompt: &Prompt, message: &str) -> Self {
        self.replies.insert(prompt.system, Err(message.to_string()));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        let reply = self.replies.get(request.system.as_str()).cloned();
        self.calls.lock().unwrap().push(request);

        match reply {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(LlmError::Api {
                status: 500,
                message,
            }),
            None => Err(LlmError::EmptyResponse),
        }
    }
}

/// Always yields the same rate
pub struct FixedRate(pub i64);

impl RateSource for FixedRate {
    fn next_rate(&self) -> i64 {
        self.0
    }
}
