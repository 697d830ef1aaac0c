mod espeak_engine;

pub use espeak_engine::{
    DEFAULT_VARIANT_LANGUAGE, ESPEAK_NATURAL_RATE, EspeakEngine, parse_variant_listing,
    parse_voice_listing,
};
