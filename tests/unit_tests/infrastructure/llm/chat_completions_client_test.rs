use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use eduspeak::application::ports::{LlmClient, LlmClientError};
use eduspeak::infrastructure::llm::{ChatCompletionsClient, create_chat_completions_client};
use eduspeak::presentation::config::LlmSettings;

#[derive(Clone)]
struct MockProvider {
    status: u16,
    body: &'static str,
    last_request: Arc<Mutex<Option<Value>>>,
    last_auth: Arc<Mutex<Option<String>>>,
}

async fn chat_completions(
    State(provider): State<MockProvider>,
    headers: HeaderMap,
    Json(request): Json<Value>,
) -> impl IntoResponse {
    *provider.last_request.lock().unwrap() = Some(request);
    *provider.last_auth.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    (StatusCode::from_u16(provider.status).unwrap(), provider.body)
}

async fn start_mock_provider(
    status: u16,
    body: &'static str,
) -> (String, MockProvider, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let provider = MockProvider {
        status,
        body,
        last_request: Arc::default(),
        last_auth: Arc::default(),
    };

    let app = Router::new()
        .route("/openai/v1/chat/completions", post(chat_completions))
        .with_state(provider.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (format!("http://{}/openai/v1/", addr), provider, shutdown_tx)
}

fn client(base_url: &str) -> ChatCompletionsClient {
    ChatCompletionsClient::new(
        base_url,
        "gsk_test".to_string(),
        "llama-3.1-70b-versatile".to_string(),
        512,
        0.3,
    )
}

#[tokio::test]
async fn given_choices_response_when_completing_then_returns_message_content() {
    let (base_url, provider, shutdown_tx) = start_mock_provider(
        200,
        r#"{"choices":[{"message":{"role":"assistant","content":"Improved lecture notes"}}]}"#,
    )
    .await;

    let result = client(&base_url)
        .complete("You are EduEnhancer.", "raw transcript")
        .await
        .unwrap();

    assert_eq!(result, "Improved lecture notes");

    let request = provider.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(request["model"], "llama-3.1-70b-versatile");
    assert_eq!(request["stream"], false);
    assert_eq!(request["max_tokens"], 512);
    assert_eq!(request["messages"][0]["role"], "system");
    assert_eq!(request["messages"][0]["content"], "You are EduEnhancer.");
    assert_eq!(request["messages"][1]["role"], "user");
    assert_eq!(request["messages"][1]["content"], "raw transcript");
    assert_eq!(
        provider.last_auth.lock().unwrap().as_deref(),
        Some("Bearer gsk_test")
    );
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_top_level_text_field_when_completing_then_returns_it() {
    let (base_url, _provider, shutdown_tx) =
        start_mock_provider(200, r#"{"text":"Bonjour la classe"}"#).await;

    let result = client(&base_url).complete("sys", "hello class").await.unwrap();

    assert_eq!(result, "Bonjour la classe");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unrecognized_body_when_completing_then_returns_raw_body() {
    let (base_url, _provider, shutdown_tx) =
        start_mock_provider(200, "plain answer without json").await;

    let result = client(&base_url).complete("sys", "prompt").await.unwrap();

    assert_eq!(result, "plain answer without json");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_json_without_known_fields_when_completing_then_returns_raw_body() {
    let body = r#"{"id":"cmpl-1","object":"chat.completion"}"#;
    let (base_url, _provider, shutdown_tx) = start_mock_provider(200, body).await;

    let result = client(&base_url).complete("sys", "prompt").await.unwrap();

    assert_eq!(result, body);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_status_when_completing_then_returns_rate_limited() {
    let (base_url, _provider, shutdown_tx) =
        start_mock_provider(429, r#"{"error":"slow down"}"#).await;

    let result = client(&base_url).complete("sys", "prompt").await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_completing_then_returns_api_error_with_body() {
    let (base_url, _provider, shutdown_tx) =
        start_mock_provider(500, r#"{"error":"model overloaded"}"#).await;

    let result = client(&base_url).complete("sys", "prompt").await;

    match result {
        Err(LlmClientError::ApiRequestFailed(message)) => {
            assert!(message.contains("500"));
            assert!(message.contains("model overloaded"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[test]
fn given_llm_settings_when_creating_client_then_uses_configured_model() {
    let settings = LlmSettings {
        model: "mixtral-8x7b-32768".to_string(),
        ..LlmSettings::default()
    };

    let client = create_chat_completions_client(&settings);

    assert_eq!(client.model(), "mixtral-8x7b-32768");
}
