use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{SpeechEngine, SpeechEngineError};
use crate::domain::{SpeechSettings, Voice};

/// espeak-ng speaks at 175 words per minute unless told otherwise.
pub const ESPEAK_NATURAL_RATE: u32 = 175;

/// Language the voice variants are applied to unless configured otherwise.
pub const DEFAULT_VARIANT_LANGUAGE: &str = "en";

const MAX_AMPLITUDE: f32 = 200.0;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const VARIANT_FILE_PREFIX: &str = "!v/";

/// Local text-to-speech through the `espeak-ng` command line tool.
pub struct EspeakEngine {
    binary: PathBuf,
    variant_language: String,
    timeout: Duration,
}

impl EspeakEngine {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            variant_language: DEFAULT_VARIANT_LANGUAGE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Language combined with each voice variant, as in `-v en+david`.
    pub fn with_variant_language(mut self, language: impl Into<String>) -> Self {
        self.variant_language = language.into();
        self
    }

    async fn run(&self, args: &[String], stdin: Option<&str>) -> Result<Output, SpeechEngineError> {
        let mut child = Command::new(&self.binary)
            .args(args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                SpeechEngineError::Unavailable(format!("{}: {}", self.binary.display(), e))
            })?;

        // Writing stdin counts against the timeout as well.
        let stdin_pipe = child.stdin.take();
        let exchange = async move {
            if let (Some(text), Some(mut pipe)) = (stdin, stdin_pipe) {
                pipe.write_all(text.as_bytes()).await?;
                pipe.shutdown().await?;
            }
            let output = child.wait_with_output().await?;
            Ok::<_, std::io::Error>(output)
        };

        let output = tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| SpeechEngineError::TimedOut(self.timeout.as_secs()))??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SpeechEngineError::SynthesisFailed(format!(
                "{}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(output)
    }
}

/// Parses the table printed by `espeak-ng --voices`.
///
/// Columns are `Pty Language Age/Gender VoiceName File [Other Languages]`;
/// the language code doubles as the id passed to `-v`.
pub fn parse_voice_listing(listing: &str) -> Vec<Voice> {
    listing_rows(listing)
        .map(|row| Voice::new(row.language, row.name.replace('_', " ")))
        .collect()
}

/// Parses `espeak-ng --voices=variant` into voices for `language`.
///
/// Variants are listed with the file `!v/<variant>`; the engine selects one
/// as `<language>+<variant>`, and the voice keeps the variant's own name
/// (`Alex`, `david`, `m1`).
pub fn parse_variant_listing(listing: &str, language: &str) -> Vec<Voice> {
    listing_rows(listing)
        .filter_map(|row| {
            let variant = row.file.strip_prefix(VARIANT_FILE_PREFIX)?;
            Some(Voice::new(
                format!("{}+{}", language, variant),
                row.name.replace('_', " "),
            ))
        })
        .collect()
}

struct ListingRow<'a> {
    language: &'a str,
    name: &'a str,
    file: &'a str,
}

fn listing_rows(listing: &str) -> impl Iterator<Item = ListingRow<'_>> {
    listing.lines().filter_map(|line| {
        let columns: Vec<&str> = line.split_whitespace().collect();
        match columns.as_slice() {
            ["Pty", ..] => None,
            [_, language, _, name, file, ..] => Some(ListingRow {
                language: *language,
                name: *name,
                file: *file,
            }),
            _ => None,
        }
    })
}

fn amplitude(volume: f32) -> u32 {
    (volume.clamp(0.0, 1.0) * MAX_AMPLITUDE).round() as u32
}

#[async_trait]
impl SpeechEngine for EspeakEngine {
    async fn voices(&self) -> Result<Vec<Voice>, SpeechEngineError> {
        let output = self.run(&["--voices".to_string()], None).await?;
        let mut voices = parse_voice_listing(&String::from_utf8_lossy(&output.stdout));

        match self.run(&["--voices=variant".to_string()], None).await {
            Ok(output) => voices.extend(parse_variant_listing(
                &String::from_utf8_lossy(&output.stdout),
                &self.variant_language,
            )),
            Err(e) => tracing::warn!(error = %e, "Listing espeak-ng variants failed"),
        }

        tracing::debug!(count = voices.len(), "Listed espeak-ng voices");
        Ok(voices)
    }

    fn natural_rate(&self) -> u32 {
        ESPEAK_NATURAL_RATE
    }

    async fn synthesize_to_file(
        &self,
        text: &str,
        settings: &SpeechSettings,
        output: &Path,
    ) -> Result<(), SpeechEngineError> {
        let mut args = vec![
            "-w".to_string(),
            output.display().to_string(),
            "-s".to_string(),
            settings.rate.to_string(),
            "-a".to_string(),
            amplitude(settings.volume).to_string(),
        ];
        if let Some(voice) = &settings.voice {
            args.push("-v".to_string());
            args.push(voice.id.clone());
        }
        args.push("--stdin".to_string());

        self.run(&args, Some(text)).await?;

        let written = tokio::fs::metadata(output).await?.len();
        if written == 0 {
            return Err(SpeechEngineError::SynthesisFailed(
                "engine produced no audio".to_string(),
            ));
        }

        tracing::info!(bytes = written, rate = settings.rate, "Speech synthesized");
        Ok(())
    }
}
