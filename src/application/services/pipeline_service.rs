use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{
    LlmClientError, ScratchStore, ScratchStoreError, SpeechEngine, SpeechEngineError,
    TranscriptionEngine, TranscriptionError,
};
use crate::domain::{
    AudioUpload, DEFAULT_RATE_FACTOR, FULL_VOLUME, MIN_SPEECH_RATE, ScratchFile, SynthesisRequest,
    TargetLanguage, VoicePreference,
};

use super::text_transformer::TextTransformer;

const SPEECH_SCRATCH_NAME: &str = "speech.wav";

/// Sequences the adapters for each user-facing operation.
///
/// Every call is self-contained: scratch files are scoped to the call (or,
/// for speech, handed to the caller) and no state survives between calls.
pub struct PipelineService {
    transcription_engine: Arc<dyn TranscriptionEngine>,
    text_transformer: Arc<TextTransformer>,
    speech_engine: Arc<dyn SpeechEngine>,
    scratch_store: Arc<dyn ScratchStore>,
    speech_options: SpeechOptions,
}

/// Rate and voice policy applied to every synthesis request.
#[derive(Debug, Clone)]
pub struct SpeechOptions {
    pub voice_preference: VoicePreference,
    pub rate_factor: f32,
    pub min_rate: u32,
    pub volume: f32,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            voice_preference: VoicePreference::default(),
            rate_factor: DEFAULT_RATE_FACTOR,
            min_rate: MIN_SPEECH_RATE,
            volume: FULL_VOLUME,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TranscriptionOutcome {
    pub transcript: String,
    pub enhanced: String,
}

#[derive(Debug, Clone)]
pub struct EnhancementOutcome {
    pub original: String,
    pub enhanced: String,
}

#[derive(Debug, Clone)]
pub struct TranslationOutcome {
    pub language: TargetLanguage,
    pub translated: String,
}

impl PipelineService {
    pub fn new(
        transcription_engine: Arc<dyn TranscriptionEngine>,
        text_transformer: Arc<TextTransformer>,
        speech_engine: Arc<dyn SpeechEngine>,
        scratch_store: Arc<dyn ScratchStore>,
    ) -> Self {
        Self {
            transcription_engine,
            text_transformer,
            speech_engine,
            scratch_store,
            speech_options: SpeechOptions::default(),
        }
    }

    pub fn with_speech_options(mut self, options: SpeechOptions) -> Self {
        self.speech_options = options;
        self
    }

    /// Transcribes an uploaded recording, then enhances the transcript.
    ///
    /// A missing upload is rejected before any scratch file exists. Once the
    /// upload is persisted its file is removed on every path out of here.
    #[tracing::instrument(skip(self, upload))]
    pub async fn transcribe(
        &self,
        upload: Option<AudioUpload>,
    ) -> Result<TranscriptionOutcome, PipelineError> {
        let upload = upload
            .filter(|u| !u.is_empty())
            .ok_or(PipelineError::MissingAudio)?;

        tracing::debug!(
            filename = %upload.filename,
            extension = upload.extension().as_deref().unwrap_or("none"),
            bytes = upload.size(),
            "Persisting upload"
        );

        let scratch = self
            .scratch_store
            .persist(&upload.filename, &upload.data)
            .await
            .map_err(PipelineError::Scratch)?;

        let outcome = self.transcribe_and_enhance(scratch.path()).await;
        scratch.release().await;
        outcome
    }

    async fn transcribe_and_enhance(
        &self,
        audio_path: &Path,
    ) -> Result<TranscriptionOutcome, PipelineError> {
        let transcript = self
            .transcription_engine
            .transcribe(audio_path)
            .await
            .map_err(PipelineError::Transcription)?;

        tracing::info!(chars = transcript.len(), "Transcription completed");

        let enhanced = self
            .text_transformer
            .enhance(&transcript)
            .await
            .map_err(PipelineError::Transform)?;

        Ok(TranscriptionOutcome {
            transcript,
            enhanced,
        })
    }

    #[tracing::instrument(skip(self, text))]
    pub async fn enhance(&self, text: &str) -> Result<EnhancementOutcome, PipelineError> {
        let original = require_text(text)?;

        let enhanced = self
            .text_transformer
            .enhance(original)
            .await
            .map_err(PipelineError::Transform)?;

        tracing::info!(chars = enhanced.len(), "Enhancement completed");

        Ok(EnhancementOutcome {
            original: original.to_string(),
            enhanced,
        })
    }

    #[tracing::instrument(skip(self, text))]
    pub async fn translate(
        &self,
        text: &str,
        language: Option<&str>,
    ) -> Result<TranslationOutcome, PipelineError> {
        let text = require_text(text)?;
        let language = TargetLanguage::parse(language);

        let translated = self
            .text_transformer
            .translate(text, &language)
            .await
            .map_err(PipelineError::Transform)?;

        tracing::info!(language = %language, chars = translated.len(), "Translation completed");

        Ok(TranslationOutcome {
            language,
            translated,
        })
    }

    /// Synthesizes `text` into a scratch WAV file.
    ///
    /// The returned handle owns the file; the caller drops it once the audio
    /// has been delivered.
    #[tracing::instrument(skip(self, text))]
    pub async fn speak(&self, text: &str) -> Result<ScratchFile, PipelineError> {
        let text = require_text(text)?;

        let request = SynthesisRequest::new(text)
            .with_voice_preference(self.speech_options.voice_preference.clone())
            .with_rate(self.speech_options.rate_factor, self.speech_options.min_rate)
            .with_volume(self.speech_options.volume);

        let voices = match self.speech_engine.voices().await {
            Ok(voices) => voices,
            Err(e) => {
                tracing::warn!(error = %e, "Voice listing failed, using engine default voice");
                Vec::new()
            }
        };
        let settings = request.resolve(&voices, self.speech_engine.natural_rate());

        tracing::debug!(
            voice = settings.voice.as_ref().map(|v| v.name.as_str()).unwrap_or("default"),
            rate = settings.rate,
            "Synthesizing speech"
        );

        let output = self
            .scratch_store
            .acquire(SPEECH_SCRATCH_NAME)
            .await
            .map_err(PipelineError::Scratch)?;

        self.speech_engine
            .synthesize_to_file(&request.text, &settings, output.path())
            .await
            .map_err(PipelineError::Synthesis)?;

        Ok(output)
    }
}

fn require_text(text: &str) -> Result<&str, PipelineError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PipelineError::MissingText);
    }
    Ok(trimmed)
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("No audio file uploaded. Ensure input name='audio' and multipart/form-data.")]
    MissingAudio,
    #[error("No text provided.")]
    MissingText,
    #[error("scratch storage: {0}")]
    Scratch(ScratchStoreError),
    #[error("transcription: {0}")]
    Transcription(TranscriptionError),
    #[error("language model: {0}")]
    Transform(LlmClientError),
    #[error("speech engine: {0}")]
    Synthesis(SpeechEngineError),
}

impl PipelineError {
    /// True for input problems detected before any external call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingAudio | Self::MissingText)
    }
}
