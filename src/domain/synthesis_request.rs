use super::voice::Voice;

/// Name fragments that identify a male-sounding voice, matched case-insensitively.
pub const PREFERRED_VOICE_KEYWORDS: [&str; 7] =
    ["male", "david", "mark", "daniel", "alex", "george", "tom"];

/// Fraction of the engine's natural speaking rate used for playback.
pub const DEFAULT_RATE_FACTOR: f32 = 0.6;

/// Slowest rate ever requested from the engine, in engine units.
pub const MIN_SPEECH_RATE: u32 = 80;

pub const FULL_VOLUME: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoicePreference {
    keywords: Vec<String>,
}

impl VoicePreference {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// Returns the first voice whose name contains any preferred keyword.
    pub fn select<'a>(&self, voices: &'a [Voice]) -> Option<&'a Voice> {
        voices.iter().find(|voice| {
            let name = voice.name.to_lowercase();
            self.keywords.iter().any(|k| name.contains(k.as_str()))
        })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Default for VoicePreference {
    fn default() -> Self {
        Self::new(PREFERRED_VOICE_KEYWORDS)
    }
}

/// Text to speak together with the policy used to configure the engine.
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_preference: VoicePreference,
    pub rate_factor: f32,
    pub min_rate: u32,
    pub volume: f32,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_preference: VoicePreference::default(),
            rate_factor: DEFAULT_RATE_FACTOR,
            min_rate: MIN_SPEECH_RATE,
            volume: FULL_VOLUME,
        }
    }

    pub fn with_voice_preference(mut self, preference: VoicePreference) -> Self {
        self.voice_preference = preference;
        self
    }

    pub fn with_rate(mut self, rate_factor: f32, min_rate: u32) -> Self {
        self.rate_factor = rate_factor;
        self.min_rate = min_rate;
        self
    }

    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume.clamp(0.0, FULL_VOLUME);
        self
    }

    pub fn effective_rate(&self, natural_rate: u32) -> u32 {
        let scaled = (natural_rate as f32 * self.rate_factor) as u32;
        scaled.max(self.min_rate)
    }

    /// Resolves the policy against what the engine actually offers.
    pub fn resolve(&self, voices: &[Voice], natural_rate: u32) -> SpeechSettings {
        SpeechSettings {
            voice: self.voice_preference.select(voices).cloned(),
            rate: self.effective_rate(natural_rate),
            volume: self.volume,
        }
    }
}

/// Concrete engine settings for one synthesis call. `voice: None` means the
/// engine default.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechSettings {
    pub voice: Option<Voice>,
    pub rate: u32,
    pub volume: f32,
}
