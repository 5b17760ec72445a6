use async_trait::async_trait;

use super::types::ChatRequest;
use crate::core::errors::ClientError;

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// return the provider name (e.g. "groq")
    fn name(&self) -> &str;

    /// model the provider sends requests to
    fn model(&self) -> &str;

    /// chat completion (non-streaming); `None` when the response carries no
    /// message content
    async fn chat(&self, request: ChatRequest) -> Result<Option<String>, ClientError>;
}
