use std::path::Path;

use async_trait::async_trait;

use crate::domain::{SpeechSettings, Voice};

#[async_trait]
pub trait SpeechEngine: Send + Sync {
    async fn voices(&self) -> Result<Vec<Voice>, SpeechEngineError>;

    /// Speaking rate the engine uses when none is set, in engine units.
    fn natural_rate(&self) -> u32;

    /// Writes a complete WAV rendition of `text` to `output`.
    async fn synthesize_to_file(
        &self,
        text: &str,
        settings: &SpeechSettings,
        output: &Path,
    ) -> Result<(), SpeechEngineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechEngineError {
    #[error("engine unavailable: {0}")]
    Unavailable(String),
    #[error("synthesis failed: {0}")]
    SynthesisFailed(String),
    #[error("engine timed out after {0}s")]
    TimedOut(u64),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
