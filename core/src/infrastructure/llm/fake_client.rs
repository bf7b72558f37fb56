//! Scripted completion client for tests.

use std::collections::VecDeque;

use tokio::sync::Mutex;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{errors::CompletionFailure, ports::LLMClient},
};

/// Returns queued replies in order, then an empty-response failure. Every
/// prompt it receives is recorded.
#[derive(Debug, Default)]
pub struct FakeLLMClient {
    replies: Mutex<VecDeque<Result<String, CoreError>>>,
    prompts: Mutex<Vec<String>>,
}

impl FakeLLMClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push_response(&self, response: &str) {
        self.replies.lock().await.push_back(Ok(response.to_string()));
    }

    pub async fn push_error(&self, error: CoreError) {
        self.replies.lock().await.push_back(Err(error));
    }

    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }
}

impl LLMClient for FakeLLMClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        _response_schema: Option<serde_json::Value>,
    ) -> Result<String, CoreError> {
        self.prompts.lock().await.push(prompt);

        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or(Err(CoreError::Completion(CompletionFailure::EmptyResponse)))
    }
}
