use std::sync::Arc;

use tracing::info;

use crate::{
    config::Config,
    ingest::IngestionPipeline,
    load::load_reviews,
    query::QueryEngine,
    sentiment::{LexiconScorer, SentimentScorer},
    store::{Review, ReviewStore},
};

pub struct AppState {
    pub config: Config,
    pub engine: QueryEngine,
    pub pipeline: IngestionPipeline,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();

        let reviews = load_reviews(&config.reviews_path).expect("Review dataset misconfigured!");
        info!("Loaded {} reviews from {}", reviews.len(), config.reviews_path);

        Self::from_reviews(config, reviews)
    }

    pub fn from_reviews(config: Config, reviews: Vec<Review>) -> Arc<Self> {
        let store = Arc::new(ReviewStore::new(reviews));
        let scorer: Arc<dyn SentimentScorer> = Arc::new(LexiconScorer::new());

        Arc::new(Self {
            config,
            engine: QueryEngine::new(store.clone(), scorer.clone()),
            pipeline: IngestionPipeline::new(store, scorer),
        })
    }
}
