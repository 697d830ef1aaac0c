mod enhance;
mod health;
mod home;
mod speak;
mod transcribe;
mod translate;

pub use enhance::{enhance_form_handler, enhance_handler};
pub use health::health_handler;
pub use home::home_handler;
pub use speak::{SPEECH_DOWNLOAD_NAME, speak_form_handler, speak_handler};
pub use transcribe::{AUDIO_FIELD, transcribe_form_handler, transcribe_handler};
pub use translate::{translate_form_handler, translate_handler};

use axum::Form;
use axum::extract::rejection::FormRejection;
use serde::Deserialize;

use crate::application::services::PipelineError;

/// Form body shared by the text-based operations.
#[derive(Debug, Deserialize)]
pub struct TextForm {
    #[serde(default)]
    pub text: String,
}

/// Text from a decoded form. A body that is not a decodable form counts as
/// no text, so it takes the same validation path as a blank field.
pub(crate) fn form_text(form: Result<Form<TextForm>, FormRejection>) -> String {
    match form {
        Ok(Form(form)) => form.text,
        Err(e) => {
            tracing::warn!(error = %e, "Request body is not a text form");
            String::new()
        }
    }
}

/// Message shown to the user. Validation errors speak for themselves;
/// upstream failures are prefixed with the operation that failed.
pub(crate) fn user_message(error: &PipelineError, context: &str) -> String {
    if error.is_validation() {
        error.to_string()
    } else {
        format!("{}: {}", context, error)
    }
}
