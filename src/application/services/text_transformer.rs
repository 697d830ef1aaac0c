use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{AgentProfile, TargetLanguage};

use super::reasoning_filter::strip_reasoning_markup;

/// Enhancement and translation agents sharing one language-model client.
///
/// System prompts are rendered once from immutable profiles; nothing is
/// mutated per request.
pub struct TextTransformer {
    llm_client: Arc<dyn LlmClient>,
    enhancer_prompt: String,
    translator_prompt: String,
}

impl TextTransformer {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self::with_profiles(llm_client, &AgentProfile::enhancer(), &AgentProfile::translator())
    }

    pub fn with_profiles(
        llm_client: Arc<dyn LlmClient>,
        enhancer: &AgentProfile,
        translator: &AgentProfile,
    ) -> Self {
        Self {
            llm_client,
            enhancer_prompt: enhancer.system_prompt(),
            translator_prompt: translator.system_prompt(),
        }
    }

    pub async fn enhance(&self, text: &str) -> Result<String, LlmClientError> {
        let raw = self.llm_client.complete(&self.enhancer_prompt, text).await?;
        Ok(strip_reasoning_markup(&raw))
    }

    pub async fn translate(
        &self,
        text: &str,
        language: &TargetLanguage,
    ) -> Result<String, LlmClientError> {
        let prompt = translation_prompt(text, language);
        let raw = self
            .llm_client
            .complete(&self.translator_prompt, &prompt)
            .await?;
        Ok(strip_reasoning_markup(&raw))
    }
}

fn translation_prompt(text: &str, language: &TargetLanguage) -> String {
    format!(
        "Translate the following English text to {}:\n\n{}",
        language, text
    )
}
