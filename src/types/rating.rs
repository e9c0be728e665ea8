//! The rating record and its indexed form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single (user, item, rating, timestamp) interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Opaque user identifier.
    pub user_id: String,
    /// Opaque item identifier.
    pub item_id: String,
    /// Score given by the user. The range is dataset-defined and never checked here.
    pub rating_value: f64,
    /// When the rating was given (Unix epoch seconds). Required for indexing and splitting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl Rating {
    /// Create an untimed rating.
    pub fn new(user_id: impl Into<String>, item_id: impl Into<String>, rating_value: f64) -> Self {
        Self {
            user_id: user_id.into(),
            item_id: item_id.into(),
            rating_value,
            timestamp: None,
        }
    }

    /// Attach a timestamp (Unix epoch seconds).
    pub fn at(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// The timestamp as a UTC date-time, if present and representable.
    pub fn reviewed_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    }
}

/// A rating together with its 0-based chronological position among its user's ratings.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedRating {
    pub rating: Rating,
    pub item_index: usize,
}

impl IndexedRating {
    /// Drop the index and return the plain rating.
    pub fn into_rating(self) -> Rating {
        self.rating
    }
}
