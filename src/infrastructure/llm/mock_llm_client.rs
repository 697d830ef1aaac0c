use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};

/// Echoes the prompt back, wrapped in reasoning markup the way reasoning
/// models answer. Used in scaffold mode so the pipeline runs offline.
pub struct MockLlmClient {
    delay: Duration,
}

impl MockLlmClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _system_prompt: &str, prompt: &str) -> Result<String, LlmClientError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(format!("<think>mock reasoning</think>{}", prompt))
    }
}
