mod chat_completions_client;
mod mock_llm_client;

pub use chat_completions_client::{ChatCompletionsClient, create_chat_completions_client};
pub use mock_llm_client::MockLlmClient;
