use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use eduspeak::application::ports::{LlmClient, SpeechEngine, TranscriptionEngine};
use eduspeak::application::services::{PipelineService, SpeechOptions, TextTransformer};
use eduspeak::domain::VoicePreference;
use eduspeak::infrastructure::audio::{MockTranscriptionEngine, OpenAiWhisperEngine};
use eduspeak::infrastructure::llm::{MockLlmClient, create_chat_completions_client};
use eduspeak::infrastructure::observability::{TracingConfig, init_tracing};
use eduspeak::infrastructure::speech::EspeakEngine;
use eduspeak::infrastructure::storage::LocalScratchStore;
use eduspeak::presentation::{AppState, Environment, ScaffoldConfig, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(
        environment.as_str(),
        &settings.logging,
    ));

    let scaffold = ScaffoldConfig::from_env();

    let (transcription_engine, llm_client): (Arc<dyn TranscriptionEngine>, Arc<dyn LlmClient>) =
        if scaffold.enabled {
            tracing::warn!("Scaffold mode enabled, remote providers replaced by mocks");
            (
                Arc::new(MockTranscriptionEngine::new(
                    "this is a mock transcript of the uploaded recording",
                    scaffold.mock_delay(),
                )),
                Arc::new(MockLlmClient::new(scaffold.mock_delay())),
            )
        } else {
            if settings.transcription.api_key.is_empty() {
                tracing::warn!("No transcription API key configured (OPENAI_API_KEY)");
            }
            if settings.llm.api_key.is_empty() {
                tracing::warn!("No language model API key configured (GROQ_API_KEY)");
            }
            let chat_client = create_chat_completions_client(&settings.llm);
            tracing::info!(model = %chat_client.model(), "Language model client configured");
            (
                Arc::new(
                    OpenAiWhisperEngine::new(
                        settings.transcription.api_key.clone(),
                        Some(settings.transcription.base_url.clone()),
                        Some(settings.transcription.model.clone()),
                    )
                    .with_timeout(Duration::from_secs(settings.transcription.timeout_secs)),
                ),
                Arc::new(chat_client),
            )
        };

    let speech_engine: Arc<dyn SpeechEngine> = Arc::new(
        EspeakEngine::new(&settings.speech.binary)
            .with_variant_language(settings.speech.variant_language.clone())
            .with_timeout(Duration::from_secs(settings.speech.timeout_secs)),
    );

    let scratch_dir = settings.scratch.resolved_dir();
    let scratch_store = Arc::new(
        LocalScratchStore::new(scratch_dir.clone())
            .with_context(|| format!("Failed to prepare scratch dir {}", scratch_dir.display()))?,
    );

    let speech_options = SpeechOptions {
        voice_preference: VoicePreference::new(&settings.speech.preferred_voices),
        rate_factor: settings.speech.rate_factor,
        min_rate: settings.speech.min_rate,
        volume: settings.speech.volume,
    };

    let pipeline_service = Arc::new(
        PipelineService::new(
            transcription_engine,
            Arc::new(TextTransformer::new(llm_client)),
            speech_engine,
            scratch_store,
        )
        .with_speech_options(speech_options),
    );

    tracing::info!(
        transcription_model = %settings.transcription.model,
        scratch_dir = %scratch_dir.display(),
        "Pipeline configured"
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host/port")?;

    let router = create_router(AppState::new(pipeline_service, settings));

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
