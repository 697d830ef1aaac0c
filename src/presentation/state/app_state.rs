use std::sync::Arc;

use crate::application::services::PipelineService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub pipeline_service: Arc<PipelineService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(pipeline_service: Arc<PipelineService>, settings: Settings) -> Self {
        Self {
            pipeline_service,
            settings: Arc::new(settings),
        }
    }
}
