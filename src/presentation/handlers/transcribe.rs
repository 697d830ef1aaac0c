use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::response::Html;

use super::user_message;
use crate::domain::AudioUpload;
use crate::presentation::state::AppState;
use crate::presentation::views;

pub const AUDIO_FIELD: &str = "audio";

pub async fn transcribe_form_handler() -> Html<String> {
    Html(views::transcribe_page(None, None))
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Html<String> {
    let upload = match multipart {
        Ok(multipart) => match read_audio_field(multipart).await {
            Ok(upload) => upload,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart upload");
                let message = format!("Processing error: failed to read upload: {}", e);
                return Html(views::transcribe_page(None, Some(&message)));
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "Transcribe request is not multipart");
            None
        }
    };

    match state.pipeline_service.transcribe(upload).await {
        Ok(outcome) => {
            tracing::info!(
                transcript_chars = outcome.transcript.len(),
                enhanced_chars = outcome.enhanced.len(),
                "Transcription request completed"
            );
            Html(views::transcribe_page(Some(&outcome), None))
        }
        Err(e) => {
            if e.is_validation() {
                tracing::warn!(error = %e, "Transcription request rejected");
            } else {
                tracing::error!(error = %e, "Transcription request failed");
            }
            let message = user_message(&e, "Processing error");
            Html(views::transcribe_page(None, Some(&message)))
        }
    }
}

async fn read_audio_field(mut multipart: Multipart) -> Result<Option<AudioUpload>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        return Ok(Some(AudioUpload::new(filename, data)));
    }
    Ok(None)
}
