use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::response::Html;

use super::{TextForm, form_text, user_message};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;
use crate::presentation::views;

pub async fn enhance_form_handler() -> Html<String> {
    Html(views::enhance_page(None, None))
}

#[tracing::instrument(skip(state, form))]
pub async fn enhance_handler(
    State(state): State<AppState>,
    form: Result<Form<TextForm>, FormRejection>,
) -> Html<String> {
    let text = form_text(form);
    tracing::debug!(text = %sanitize_prompt(&text), "Processing enhancement");

    match state.pipeline_service.enhance(&text).await {
        Ok(outcome) => Html(views::enhance_page(Some(&outcome), None)),
        Err(e) => {
            tracing::warn!(error = %e, "Enhancement request failed");
            let message = user_message(&e, "Enhancement error");
            Html(views::enhance_page(None, Some(&message)))
        }
    }
}
