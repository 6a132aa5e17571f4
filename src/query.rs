//! # Query engine
//!
//! Filters a snapshot of the store and ranks the survivors by sentiment.
//!
//! Filters are conjunctive and applied in a fixed order: location, then
//! start date, then end date. Date filters carry day granularity and are
//! compared against the literal date at midnight, so `end_date` keeps a
//! record only when its timestamp is at or before `end_date 00:00:00`.
//!
//! Sentiment is recomputed on every call rather than cached on the record,
//! so the scores always reflect the current body.

use std::{cmp::Ordering, sync::Arc};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::{
    error::AppError,
    locations,
    sentiment::{SentimentScorer, SentimentScores},
    store::{Review, ReviewStore},
};

#[derive(Debug, Default)]
pub struct ReviewQuery {
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// A review as it leaves the system: the stored record plus the sentiment
/// computed for this response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredReview {
    #[serde(flatten)]
    pub review: Review,
    pub sentiment: SentimentScores,
}

pub struct QueryEngine {
    store: Arc<ReviewStore>,
    scorer: Arc<dyn SentimentScorer>,
}

impl QueryEngine {
    pub fn new(store: Arc<ReviewStore>, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { store, scorer }
    }

    pub fn query(&self, params: &ReviewQuery) -> Result<Vec<ScoredReview>, AppError> {
        let mut reviews = self.store.snapshot();

        if let Some(location) = params.location.as_deref() {
            if !locations::is_allowed(location) {
                return Err(AppError::InvalidLocation);
            }
            reviews.retain(|review| review.location == location);
        }

        if let Some(raw) = params.start_date.as_deref() {
            let start = parse_date(raw)?;
            reviews.retain(|review| review.timestamp >= start);
        }

        if let Some(raw) = params.end_date.as_deref() {
            let end = parse_date(raw)?;
            reviews.retain(|review| review.timestamp <= end);
        }

        let mut scored: Vec<ScoredReview> = reviews
            .into_iter()
            .map(|review| ScoredReview {
                sentiment: self.scorer.score(&review.body),
                review,
            })
            .collect();

        // Stable sort keeps insertion order for equal compound scores.
        scored.sort_by(|a, b| {
            b.sentiment
                .compound
                .partial_cmp(&a.sentiment.compound)
                .unwrap_or(Ordering::Equal)
        });

        Ok(scored)
    }
}

fn parse_date(raw: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| AppError::InvalidDateFormat)
}

#[cfg(test)]
mod tests {
    use crate::sentiment::LexiconScorer;

    use super::*;

    fn review(id: &str, location: &str, date: (i32, u32, u32), body: &str) -> Review {
        Review {
            id: id.to_string(),
            location: location.to_string(),
            timestamp: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
                .unwrap()
                .and_hms_opt(14, 0, 0)
                .unwrap(),
            body: body.to_string(),
        }
    }

    fn engine(reviews: Vec<Review>) -> QueryEngine {
        QueryEngine::new(
            Arc::new(ReviewStore::new(reviews)),
            Arc::new(LexiconScorer::new()),
        )
    }

    #[test]
    fn unfiltered_query_returns_everything_ranked_by_compound() {
        let engine = engine(vec![
            review("neg", "Denver, Colorado", (2024, 3, 1), "Terrible service, cold food"),
            review("pos", "Denver, Colorado", (2024, 3, 2), "Amazing meal, wonderful staff"),
            review("mid", "Fresno, California", (2024, 3, 3), "The parking lot was large"),
        ]);

        let results = engine.query(&ReviewQuery::default()).unwrap();
        let ids: Vec<&str> = results.iter().map(|r| r.review.id.as_str()).collect();

        assert_eq!(ids, ["pos", "mid", "neg"]);
        assert!(results[0].sentiment.compound > 0.0);
        assert!(results[2].sentiment.compound < 0.0);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let engine = engine(vec![
            review("first", "Denver, Colorado", (2024, 3, 1), "The menu had ten pages"),
            review("second", "Denver, Colorado", (2024, 3, 2), "We sat near the window"),
        ]);

        let results = engine.query(&ReviewQuery::default()).unwrap();
        let ids: Vec<&str> = results.iter().map(|r| r.review.id.as_str()).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn location_filter_matches_exactly() {
        let engine = engine(vec![
            review("a", "Denver, Colorado", (2024, 3, 1), "good"),
            review("b", "Fresno, California", (2024, 3, 1), "good"),
        ]);

        let results = engine
            .query(&ReviewQuery {
                location: Some("Denver, Colorado".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].review.id, "a");
    }

    #[test]
    fn unknown_location_is_rejected() {
        let engine = engine(vec![review("a", "Denver, Colorado", (2024, 3, 1), "good")]);

        let err = engine
            .query(&ReviewQuery {
                location: Some("Springfield, Illinois".to_string()),
                ..Default::default()
            })
            .unwrap_err();

        assert_eq!(err, AppError::InvalidLocation);
    }

    #[test]
    fn date_filters_bound_the_range() {
        let engine = engine(vec![
            review("old", "Denver, Colorado", (2023, 1, 5), "good"),
            review("recent", "Denver, Colorado", (2024, 6, 5), "good"),
        ]);

        let results = engine
            .query(&ReviewQuery {
                start_date: Some("2024-01-01".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].review.id, "recent");

        let results = engine
            .query(&ReviewQuery {
                end_date: Some("2023-12-31".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].review.id, "old");
    }

    #[test]
    fn end_date_compares_against_midnight() {
        // A record at 14:00 on the end date itself falls outside the range.
        let engine = engine(vec![review("a", "Denver, Colorado", (2024, 6, 5), "good")]);

        let results = engine
            .query(&ReviewQuery {
                end_date: Some("2024-06-05".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert!(results.is_empty());
    }

    #[test]
    fn start_date_after_all_records_yields_nothing() {
        let engine = engine(vec![
            review("a", "Denver, Colorado", (2024, 3, 1), "good"),
            review("b", "Fresno, California", (2024, 3, 2), "bad"),
        ]);

        let results = engine
            .query(&ReviewQuery {
                start_date: Some("2999-01-01".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert!(results.is_empty());
    }

    #[test]
    fn malformed_date_is_rejected() {
        let engine = engine(vec![review("a", "Denver, Colorado", (2024, 3, 1), "good")]);

        for raw in ["06-05-2024", "2024/06/05", "yesterday"] {
            let err = engine
                .query(&ReviewQuery {
                    start_date: Some(raw.to_string()),
                    ..Default::default()
                })
                .unwrap_err();
            assert_eq!(err, AppError::InvalidDateFormat);
        }
    }

    #[test]
    fn query_does_not_mutate_the_store() {
        let store = Arc::new(ReviewStore::new(vec![review(
            "a",
            "Denver, Colorado",
            (2024, 3, 1),
            "good",
        )]));
        let engine = QueryEngine::new(store.clone(), Arc::new(LexiconScorer::new()));

        engine.query(&ReviewQuery::default()).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot()[0].id, "a");
    }
}
