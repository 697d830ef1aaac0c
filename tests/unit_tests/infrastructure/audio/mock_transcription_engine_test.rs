use std::path::Path;
use std::time::Duration;

use eduspeak::application::ports::{TranscriptionEngine, TranscriptionError};
use eduspeak::infrastructure::audio::MockTranscriptionEngine;

#[tokio::test]
async fn given_persisted_audio_when_transcribing_then_returns_configured_transcript() {
    let dir = tempfile::TempDir::new().unwrap();
    let audio = dir.path().join("lecture.wav");
    std::fs::write(&audio, b"RIFF").unwrap();
    let engine = MockTranscriptionEngine::new("scaffold transcript", Duration::from_millis(5));

    let transcript = engine.transcribe(&audio).await.unwrap();

    assert_eq!(transcript, "scaffold transcript");
}

#[tokio::test]
async fn given_missing_audio_when_transcribing_then_returns_read_error() {
    let engine = MockTranscriptionEngine::default();

    let result = engine
        .transcribe(Path::new("/nonexistent/eduspeak/lecture.wav"))
        .await;

    assert!(matches!(result, Err(TranscriptionError::ReadFailed(_))));
}
