use axum::response::Html;

use crate::presentation::views;

pub async fn home_handler() -> Html<String> {
    Html(views::home_page())
}
