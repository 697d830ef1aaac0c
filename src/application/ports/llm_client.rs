use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Runs one instruction-conditioned completion and returns the generated
    /// text, unmodified.
    async fn complete(&self, system_prompt: &str, prompt: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
