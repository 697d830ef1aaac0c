mod pipeline_service;
mod reasoning_filter;
mod text_transformer;

pub use pipeline_service::{
    EnhancementOutcome, PipelineError, PipelineService, SpeechOptions, TranscriptionOutcome,
    TranslationOutcome,
};
pub use reasoning_filter::strip_reasoning_markup;
pub use text_transformer::TextTransformer;
