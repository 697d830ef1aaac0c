use axum::Form;
use axum::body::Body;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use bytes::Bytes;
use tokio::io::AsyncReadExt;

use super::{TextForm, form_text};
use crate::application::services::PipelineError;
use crate::domain::ScratchFile;
use crate::presentation::state::AppState;
use crate::presentation::views;

pub const SPEECH_DOWNLOAD_NAME: &str = "eduspeak_audio.wav";

const READ_CHUNK_BYTES: usize = 64 * 1024;

pub async fn speak_form_handler() -> Html<String> {
    Html(views::speak_page())
}

/// Streams the synthesized WAV as a download. The scratch file travels with
/// the body and is removed once the body finishes or is dropped.
#[tracing::instrument(skip(state, form))]
pub async fn speak_handler(
    State(state): State<AppState>,
    form: Result<Form<TextForm>, FormRejection>,
) -> Response {
    let text = form_text(form);

    let audio = match state.pipeline_service.speak(&text).await {
        Ok(audio) => audio,
        Err(PipelineError::MissingText) => {
            return (StatusCode::BAD_REQUEST, "No text provided").into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Speech request failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Speech generation error: {}", e),
            )
                .into_response();
        }
    };

    let file = match tokio::fs::File::open(audio.path()).await {
        Ok(file) => file,
        Err(e) => {
            tracing::error!(error = %e, "Synthesized audio could not be opened");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Speech generation error: {}", e),
            )
                .into_response();
        }
    };
    let content_length = file.metadata().await.map(|m| m.len()).ok();

    let mut response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "audio/wav")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", SPEECH_DOWNLOAD_NAME),
        );
    if let Some(len) = content_length {
        response = response.header(header::CONTENT_LENGTH, len);
    }

    match response.body(stream_scratch_file(audio, file)) {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build speech response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn stream_scratch_file(audio: ScratchFile, file: tokio::fs::File) -> Body {
    let stream = async_stream::stream! {
        let mut file = file;
        let mut buf = vec![0u8; READ_CHUNK_BYTES];
        loop {
            match file.read(&mut buf).await {
                Ok(0) => break,
                Ok(n) => yield Ok::<Bytes, std::io::Error>(Bytes::copy_from_slice(&buf[..n])),
                Err(e) => {
                    yield Err(e);
                    break;
                }
            }
        }
        drop(file);
        audio.release().await;
    };
    Body::from_stream(stream)
}
