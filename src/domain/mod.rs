mod agent_profile;
mod audio_upload;
mod scratch_file;
mod synthesis_request;
mod target_language;
mod voice;

pub use agent_profile::AgentProfile;
pub use audio_upload::AudioUpload;
pub use scratch_file::ScratchFile;
pub use synthesis_request::{
    DEFAULT_RATE_FACTOR, FULL_VOLUME, MIN_SPEECH_RATE, PREFERRED_VOICE_KEYWORDS, SpeechSettings,
    SynthesisRequest, VoicePreference,
};
pub use target_language::{DEFAULT_TARGET_LANGUAGE, TargetLanguage};
pub use voice::Voice;
