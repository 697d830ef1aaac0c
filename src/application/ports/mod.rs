mod llm_client;
mod scratch_store;
mod speech_engine;
mod transcription_engine;

pub use llm_client::{LlmClient, LlmClientError};
pub use scratch_store::{ScratchStore, ScratchStoreError};
pub use speech_engine::{SpeechEngine, SpeechEngineError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
