use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use crate::application::services::PipelineError;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;
use crate::presentation::views::{self, escape_html};

#[derive(Debug, Default, Deserialize)]
pub struct TranslateForm {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub lang: Option<String>,
}

pub async fn translate_form_handler() -> Html<String> {
    Html(views::translate_form_page())
}

/// Answers with a standalone result page, or a plain-text error.
#[tracing::instrument(skip(state, form))]
pub async fn translate_handler(
    State(state): State<AppState>,
    form: Result<Form<TranslateForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(e) => {
            tracing::warn!(error = %e, "Translation body is not a form");
            TranslateForm::default()
        }
    };

    tracing::debug!(text = %sanitize_prompt(&form.text), lang = ?form.lang, "Processing translation");

    match state
        .pipeline_service
        .translate(&form.text, form.lang.as_deref())
        .await
    {
        Ok(outcome) => Html(views::translation_result_page(&outcome)).into_response(),
        Err(PipelineError::MissingText) => {
            (StatusCode::BAD_REQUEST, "No text provided").into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Translation request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Translation error: {}", escape_html(&e.to_string())),
            )
                .into_response()
        }
    }
}
