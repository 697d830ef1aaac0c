use std::path::PathBuf;

use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::domain::{DEFAULT_RATE_FACTOR, FULL_VOLUME, MIN_SPEECH_RATE, PREFERRED_VOICE_KEYWORDS};
use crate::infrastructure::speech::DEFAULT_VARIANT_LANGUAGE;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub llm: LlmSettings,
    pub speech: SpeechEngineSettings,
    pub scratch: ScratchSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers, lowest precedence first: built-in defaults, the optional
    /// `appsettings.{environment}` file, `APP_*` variables (`__` between
    /// sections), then the provider variables `OPENAI_API_KEY`,
    /// `GROQ_API_KEY` and `GROQ_MODEL`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("speech.preferred_voices")
                    .try_parsing(true),
            )
            .set_override_option("transcription.api_key", std::env::var("OPENAI_API_KEY").ok())?
            .set_override_option("llm.api_key", std::env::var("GROQ_API_KEY").ok())?
            .set_override_option("llm.model", std::env::var("GROQ_MODEL").ok())?
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

impl ServerSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_upload_mb: 25,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "whisper-1".to_string(),
            timeout_secs: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: usize,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.1-70b-versatile".to_string(),
            max_tokens: 2048,
            temperature: 0.3,
            timeout_secs: 120,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechEngineSettings {
    pub binary: String,
    pub variant_language: String,
    pub rate_factor: f32,
    pub min_rate: u32,
    pub volume: f32,
    pub preferred_voices: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for SpeechEngineSettings {
    fn default() -> Self {
        Self {
            binary: "espeak-ng".to_string(),
            variant_language: DEFAULT_VARIANT_LANGUAGE.to_string(),
            rate_factor: DEFAULT_RATE_FACTOR,
            min_rate: MIN_SPEECH_RATE,
            volume: FULL_VOLUME,
            preferred_voices: PREFERRED_VOICE_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScratchSettings {
    pub dir: Option<PathBuf>,
}

impl ScratchSettings {
    /// Configured directory, or `eduspeak` under the system temp dir.
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("eduspeak"))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info,eduspeak=debug,tower_http=debug".to_string(),
            json: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }
}
