use std::path::Path;
use std::time::Duration;

use eduspeak::application::ports::{SpeechEngine, SpeechEngineError};
use eduspeak::domain::{SpeechSettings, Voice, VoicePreference};
use eduspeak::infrastructure::speech::{
    ESPEAK_NATURAL_RATE, EspeakEngine, parse_variant_listing, parse_voice_listing,
};

const VOICE_LISTING: &str = "\
Pty Language       Age/Gender VoiceName          File                 Other Languages
 5  af              --/M      Afrikaans          gmw/af
 5  en              --/M      English_(Great_Britain) gmw/en               (en 2)
 2  en-us           --/M      English_(America)  gmw/en-US            (en 3)
 5  ml              --/M      Malayalam          dra/ml
 5  mr              --/M      Marathi            inc/mr
 5  ta              --/M      Tamil              dra/ta
";

const VARIANT_LISTING: &str = "\
Pty Language       Age/Gender VoiceName          File                 Other Languages
 5  variant          --/M      Alex               !v/Alex
 5  variant          --/F      Alicia             !v/Alicia
 5  variant          --/M      Andy               !v/Andy
 5  variant          --/M      david              !v/david
 5  variant          --/F      f1                 !v/f1
 5  variant          --/M      m1                 !v/m1
 5  variant          --/M      Mr_serious         !v/Mr_serious
";

#[test]
fn given_voice_listing_when_parsing_then_skips_header_and_maps_columns() {
    let voices = parse_voice_listing(VOICE_LISTING);

    assert_eq!(voices.len(), 6);
    assert_eq!(voices[0], Voice::new("af", "Afrikaans"));
    assert_eq!(voices[1], Voice::new("en", "English (Great Britain)"));
    assert_eq!(voices[2], Voice::new("en-us", "English (America)"));
}

#[test]
fn given_variant_listing_when_parsing_then_builds_language_plus_variant_ids() {
    let voices = parse_variant_listing(VARIANT_LISTING, "en");

    assert_eq!(voices[0], Voice::new("en+Alex", "Alex"));
    assert_eq!(voices[3], Voice::new("en+david", "david"));
    assert_eq!(voices[6], Voice::new("en+Mr_serious", "Mr serious"));
}

#[test]
fn given_rows_without_variant_file_when_parsing_variants_then_skips_them() {
    let voices = parse_variant_listing(VOICE_LISTING, "en");

    assert!(voices.is_empty());
}

#[test]
fn given_shipped_voices_when_selecting_by_default_preference_then_picks_male_variant() {
    let mut voices = parse_voice_listing(VOICE_LISTING);
    voices.extend(parse_variant_listing(VARIANT_LISTING, "en-us"));

    let selected = VoicePreference::default().select(&voices).cloned();

    assert_eq!(selected, Some(Voice::new("en-us+Alex", "Alex")));
}

#[test]
fn given_language_voices_only_when_selecting_then_nothing_matches() {
    let voices = parse_voice_listing(VOICE_LISTING);

    assert!(VoicePreference::default().select(&voices).is_none());
}

#[test]
fn given_blank_or_short_lines_when_parsing_then_ignores_them() {
    let voices = parse_voice_listing("\n   \n 5 af --/M\n");

    assert!(voices.is_empty());
}

#[tokio::test]
async fn given_missing_binary_when_listing_voices_then_reports_unavailable() {
    let engine = EspeakEngine::new("/nonexistent/eduspeak/espeak-ng");

    let result = engine.voices().await;

    assert!(matches!(result, Err(SpeechEngineError::Unavailable(_))));
}

#[test]
fn given_engine_when_asking_natural_rate_then_matches_espeak_default() {
    let engine = EspeakEngine::new("espeak-ng");

    assert_eq!(engine.natural_rate(), ESPEAK_NATURAL_RATE);
    assert_eq!(ESPEAK_NATURAL_RATE, 175);
}

#[cfg(unix)]
mod with_fake_binary {
    use super::*;

    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use std::sync::LazyLock;

    // Written once so no test forks while another still holds the script open.
    static FAKE_ESPEAK: LazyLock<(tempfile::TempDir, PathBuf)> = LazyLock::new(|| {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("fake-espeak");
        let script = format!(
            r#"#!/bin/sh
if [ "$1" = "--voices" ]; then
cat <<'LISTING'
{VOICE_LISTING}LISTING
exit 0
fi
if [ "$1" = "--voices=variant" ]; then
cat <<'LISTING'
{VARIANT_LISTING}LISTING
exit 0
fi
out="$2"
case "$*" in
  *"-v stall"*) sleep 5; exit 0 ;;
esac
text=$(cat)
echo "$@" > "$out.args"
case "$text" in
  fail) echo "unknown voice" >&2; exit 2 ;;
  silent) : > "$out" ;;
  slow) sleep 5 ;;
  *) printf 'RIFF....WAVE' > "$out" ;;
esac
"#
        );
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        (dir, path)
    });

    fn engine() -> EspeakEngine {
        EspeakEngine::new(&FAKE_ESPEAK.1)
    }

    fn recorded_args(output: &Path) -> String {
        let mut args_path = output.as_os_str().to_owned();
        args_path.push(".args");
        std::fs::read_to_string(args_path).unwrap().trim().to_string()
    }

    #[tokio::test]
    async fn given_fake_engine_when_listing_voices_then_returns_languages_and_variants() {
        let voices = engine().voices().await.unwrap();

        assert_eq!(voices.len(), 13);
        assert_eq!(voices[2], Voice::new("en-us", "English (America)"));
        assert!(voices.contains(&Voice::new("en+david", "david")));
    }

    #[tokio::test]
    async fn given_variant_language_when_listing_voices_then_prefixes_variant_ids() {
        let voices = engine().with_variant_language("en-us").voices().await.unwrap();

        assert!(voices.contains(&Voice::new("en-us+m1", "m1")));
    }

    #[tokio::test]
    async fn given_voice_and_rate_when_synthesizing_then_passes_espeak_arguments() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("speech.wav");
        let settings = SpeechSettings {
            voice: Some(Voice::new("en+david", "david")),
            rate: 105,
            volume: 1.0,
        };

        engine()
            .synthesize_to_file("hello class", &settings, &output)
            .await
            .unwrap();

        assert_eq!(std::fs::read(&output).unwrap(), b"RIFF....WAVE");
        assert_eq!(
            recorded_args(&output),
            format!("-w {} -s 105 -a 200 -v en+david --stdin", output.display())
        );
    }

    #[tokio::test]
    async fn given_no_voice_and_half_volume_when_synthesizing_then_omits_voice_flag() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("speech.wav");
        let settings = SpeechSettings {
            voice: None,
            rate: 80,
            volume: 0.5,
        };

        engine()
            .synthesize_to_file("hello", &settings, &output)
            .await
            .unwrap();

        assert_eq!(
            recorded_args(&output),
            format!("-w {} -s 80 -a 100 --stdin", output.display())
        );
    }

    #[tokio::test]
    async fn given_failing_engine_when_synthesizing_then_returns_stderr() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("speech.wav");
        let settings = SpeechSettings {
            voice: None,
            rate: 105,
            volume: 1.0,
        };

        let result = engine().synthesize_to_file("fail", &settings, &output).await;

        match result {
            Err(SpeechEngineError::SynthesisFailed(message)) => {
                assert!(message.contains("unknown voice"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn given_empty_output_when_synthesizing_then_reports_no_audio() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("speech.wav");
        let settings = SpeechSettings {
            voice: None,
            rate: 105,
            volume: 1.0,
        };

        let result = engine().synthesize_to_file("silent", &settings, &output).await;

        assert!(matches!(result, Err(SpeechEngineError::SynthesisFailed(_))));
    }

    #[tokio::test]
    async fn given_hung_engine_when_synthesizing_then_times_out() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("speech.wav");
        let settings = SpeechSettings {
            voice: None,
            rate: 105,
            volume: 1.0,
        };

        let result = engine()
            .with_timeout(Duration::from_millis(200))
            .synthesize_to_file("slow", &settings, &output)
            .await;

        assert!(matches!(result, Err(SpeechEngineError::TimedOut(_))));
    }

    #[tokio::test]
    async fn given_engine_not_reading_stdin_when_synthesizing_long_text_then_times_out() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("speech.wav");
        let settings = SpeechSettings {
            voice: Some(Voice::new("stall", "stall")),
            rate: 105,
            volume: 1.0,
        };
        let text = "lecture ".repeat(256 * 1024);

        let result = engine()
            .with_timeout(Duration::from_millis(200))
            .synthesize_to_file(&text, &settings, &output)
            .await;

        assert!(matches!(result, Err(SpeechEngineError::TimedOut(_))));
    }
}
