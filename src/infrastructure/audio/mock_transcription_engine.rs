use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

/// Offline stand-in for the transcription provider, used in scaffold mode.
pub struct MockTranscriptionEngine {
    transcript: String,
    delay: Duration,
}

impl MockTranscriptionEngine {
    pub fn new(transcript: impl Into<String>, delay: Duration) -> Self {
        Self {
            transcript: transcript.into(),
            delay,
        }
    }
}

impl Default for MockTranscriptionEngine {
    fn default() -> Self {
        Self::new(
            "this is a mock transcript of the uploaded recording",
            Duration::ZERO,
        )
    }
}

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError> {
        let metadata = tokio::fs::metadata(audio_path)
            .await
            .map_err(|e| TranscriptionError::ReadFailed(e.to_string()))?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        tracing::debug!(bytes = metadata.len(), "Mock transcription");
        Ok(self.transcript.clone())
    }
}
