//! # Ingestion pipeline
//!
//! Validates a submission, stamps it with identity and time, scores it and
//! appends it to the store. Failures are synchronous and leave the store
//! untouched; there is no retry and no duplicate detection beyond the
//! generated id, so two identical submissions become two records.

use std::sync::Arc;

use chrono::{Local, Timelike};
use uuid::Uuid;

use crate::{
    error::AppError,
    locations,
    query::ScoredReview,
    sentiment::SentimentScorer,
    store::{Review, ReviewStore},
};

pub struct IngestionPipeline {
    store: Arc<ReviewStore>,
    scorer: Arc<dyn SentimentScorer>,
}

impl IngestionPipeline {
    pub fn new(store: Arc<ReviewStore>, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { store, scorer }
    }

    /// Validation order: required fields first, then the allow-list.
    pub fn submit(
        &self,
        location: Option<&str>,
        body: Option<&str>,
    ) -> Result<ScoredReview, AppError> {
        let location = location.filter(|l| !l.is_empty()).ok_or(AppError::MissingField)?;
        let body = body.filter(|b| !b.is_empty()).ok_or(AppError::MissingField)?;

        if !locations::is_allowed(location) {
            return Err(AppError::InvalidLocation);
        }

        // Second precision, matching the wire format.
        let now = Local::now().naive_local();
        let review = Review {
            id: Uuid::new_v4().to_string(),
            location: location.to_string(),
            timestamp: now.with_nanosecond(0).unwrap_or(now),
            body: body.to_string(),
        };

        self.store.append(review.clone());

        Ok(ScoredReview {
            sentiment: self.scorer.score(&review.body),
            review,
        })
    }
}
