//! # Review store
//!
//! Owns the in-memory review collection. The store is populated once at
//! startup from the CSV source and afterwards only grows through
//! [`crate::ingest::IngestionPipeline`]; there is no update or delete.
//!
//! A single mutex guards the vector so that an `append` is atomic with
//! respect to a `snapshot`: readers get a copy of the collection and never
//! observe a half-written record.

use std::sync::Mutex;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A stored review. Sentiment is deliberately absent: it is recomputed
/// every time a record leaves the store, so it always reflects the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "ReviewId")]
    pub id: String,

    #[serde(rename = "Location")]
    pub location: String,

    #[serde(rename = "Timestamp", with = "timestamp_format")]
    pub timestamp: NaiveDateTime,

    #[serde(rename = "ReviewBody")]
    pub body: String,
}

pub struct ReviewStore {
    reviews: Mutex<Vec<Review>>,
}

impl ReviewStore {
    pub fn new(initial: Vec<Review>) -> Self {
        Self {
            reviews: Mutex::new(initial),
        }
    }

    /// Adds a validated review. Validation happens upstream in the
    /// ingestion pipeline, so this never fails.
    pub fn append(&self, review: Review) {
        self.reviews
            .lock()
            .expect("review store lock poisoned")
            .push(review);
    }

    /// Copy of the collection in insertion order: bulk-loaded rows first,
    /// then submitted ones.
    pub fn snapshot(&self) -> Vec<Review> {
        self.reviews
            .lock()
            .expect("review store lock poisoned")
            .clone()
    }

    pub fn len(&self) -> usize {
        self.reviews
            .lock()
            .expect("review store lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Serde adapter for the `YYYY-MM-DD HH:MM:SS` wire format used by both the
/// CSV source and the JSON responses.
pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn review(id: &str, body: &str) -> Review {
        Review {
            id: id.to_string(),
            location: "Denver, Colorado".to_string(),
            timestamp: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(12, 30, 0)
                .unwrap(),
            body: body.to_string(),
        }
    }

    #[test]
    fn snapshot_preserves_insertion_order() {
        let store = ReviewStore::new(vec![review("a", "first")]);
        store.append(review("b", "second"));
        store.append(review("c", "third"));

        let ids: Vec<String> = store.snapshot().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn snapshot_is_a_copy() {
        let store = ReviewStore::new(vec![review("a", "first")]);
        let before = store.snapshot();
        store.append(review("b", "second"));

        assert_eq!(before.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn review_serializes_with_wire_field_names() {
        let json = serde_json::to_value(review("a", "great tacos")).unwrap();
        assert_eq!(json["ReviewId"], "a");
        assert_eq!(json["Location"], "Denver, Colorado");
        assert_eq!(json["Timestamp"], "2024-05-01 12:30:00");
        assert_eq!(json["ReviewBody"], "great tacos");
    }
}
