use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::presentation::config::LlmSettings;

/// Client for any OpenAI-compatible `/chat/completions` endpoint (Groq by default).
pub struct ChatCompletionsClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: usize,
    temperature: f32,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl ChatCompletionsClient {
    pub fn new(
        base_url: &str,
        api_key: String,
        model: String,
        max_tokens: usize,
        temperature: f32,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            max_tokens,
            temperature,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Pulls the generated text out of a completion response body.
///
/// Looks for `choices[0].message.content`, then a top-level `content`,
/// `text` or `response` string. Bodies without any of those are returned
/// as they came.
fn extract_content(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.to_string();
    };

    let from_choices = value
        .pointer("/choices/0/message/content")
        .or_else(|| value.pointer("/choices/0/text"))
        .and_then(Value::as_str);

    from_choices
        .or_else(|| {
            ["content", "text", "response"]
                .iter()
                .find_map(|key| value.get(*key).and_then(Value::as_str))
        })
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl LlmClient for ChatCompletionsClient {
    async fn complete(&self, system_prompt: &str, prompt: &str) -> Result<String, LlmClientError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            stream: false,
        };

        tracing::debug!(model = %self.model, "Sending chat completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        Ok(extract_content(&body))
    }
}

pub fn create_chat_completions_client(settings: &LlmSettings) -> ChatCompletionsClient {
    ChatCompletionsClient::new(
        &settings.base_url,
        settings.api_key.clone(),
        settings.model.clone(),
        settings.max_tokens,
        settings.temperature,
    )
    .with_timeout(Duration::from_secs(settings.timeout_secs))
}

