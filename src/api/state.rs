use std::sync::Arc;

use crate::ai::AiGateway;
use crate::config::Config;
use crate::db::DatabaseBackend;
use crate::generator::GenerationPipeline;
use crate::search::SearchExecutor;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<dyn DatabaseBackend>,
    pub search: SearchExecutor,
    pub ai: Arc<AiGateway>,
    pub pipeline: Arc<GenerationPipeline>,
}

impl AppState {
    pub fn new(
        config: Config,
        db: Arc<dyn DatabaseBackend>,
        search: SearchExecutor,
        ai: AiGateway,
    ) -> Self {
        let config = Arc::new(config);
        let ai = Arc::new(ai);
        let pipeline = Arc::new(GenerationPipeline::new(
            db.clone(),
            search.clone(),
            ai.clone(),
            config.ai.language.clone(),
        ));

        Self {
            config,
            db,
            search,
            ai,
            pipeline,
        }
    }
}
