use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    enhance_form_handler, enhance_handler, health_handler, home_handler, speak_form_handler,
    speak_handler, transcribe_form_handler, transcribe_handler, translate_form_handler,
    translate_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.settings.server.max_upload_bytes());

    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route(
            "/transcribe",
            get(transcribe_form_handler).post(transcribe_handler),
        )
        .route("/enhance", get(enhance_form_handler).post(enhance_handler))
        .route(
            "/translate",
            get(translate_form_handler).post(translate_handler),
        )
        .route("/speak", get(speak_form_handler).post(speak_handler))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
