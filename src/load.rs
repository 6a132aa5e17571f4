//! # Bulk load
//!
//! One-time population of the store from the CSV source at startup.
//!
//! Expected columns: `Location`, `Timestamp` (`YYYY-MM-DD HH:MM:SS`),
//! `ReviewBody` and optionally `ReviewId`. Rows without an id get a fresh
//! one. Rows are trusted and not re-validated against the allow-list; a
//! corrupted source fails the whole load and is handled by startup.

use chrono::NaiveDateTime;
use serde::Deserialize;
use uuid::Uuid;

use crate::store::{timestamp_format, Review};

#[derive(Deserialize)]
struct CsvReview {
    #[serde(rename = "ReviewId", default)]
    id: Option<String>,

    #[serde(rename = "Location")]
    location: String,

    #[serde(rename = "Timestamp", with = "timestamp_format")]
    timestamp: NaiveDateTime,

    #[serde(rename = "ReviewBody")]
    body: String,
}

pub fn load_reviews(path: &str) -> Result<Vec<Review>, csv::Error> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut reviews = Vec::new();
    for row in reader.deserialize::<CsvReview>() {
        let row = row?;
        reviews.push(Review {
            id: row
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            location: row.location,
            timestamp: row.timestamp,
            body: row.body,
        });
    }

    Ok(reviews)
}
