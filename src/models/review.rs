//! Review data structures.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// A user review for a destination, in the shape the service returns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    /// Review row id
    pub id: i64,

    /// Author username
    pub username: String,

    /// Star rating, 1 to 5
    pub rating: u8,

    /// Free-text comment, empty when the author left none
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comment: String,

    /// Server-side creation timestamp, verbatim
    #[serde(default)]
    pub timestamp: String,
}

impl Review {
    /// Parse the timestamp leniently.
    ///
    /// The service emits SQLite's `YYYY-MM-DD HH:MM:SS`; older rows may carry
    /// an ISO 8601 instant instead. Unparseable values yield `None` and are
    /// displayed verbatim.
    pub fn posted_at(&self) -> Option<NaiveDateTime> {
        let raw = self.timestamp.trim();
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
            .ok()
            .or_else(|| {
                chrono::DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|dt| dt.naive_utc())
            })
    }
}

/// A review being composed, before submission.
///
/// A rating of 0 means "not chosen yet"; submission is refused locally until
/// the user picks 1 to 5.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub rating: u8,
    pub comment: String,
}

impl ReviewDraft {
    /// Back to the untouched state, after a successful submission.
    pub fn reset(&mut self) {
        self.rating = 0;
        self.comment.clear();
    }
}

/// Comments are nullable server-side; fold null into the empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn sample_review(timestamp: &str) -> Review {
        Review {
            id: 1,
            username: "bob".to_string(),
            rating: 5,
            comment: "Great spot".to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn test_parse_sqlite_timestamp() {
        let review = sample_review("2024-06-01 14:30:00");
        let at = review.posted_at().unwrap();
        assert_eq!((at.year(), at.month(), at.day()), (2024, 6, 1));
        assert_eq!(at.hour(), 14);
    }

    #[test]
    fn test_parse_iso_timestamp() {
        let review = sample_review("2024-06-01T14:30:00+00:00");
        assert!(review.posted_at().is_some());
    }

    #[test]
    fn test_unparseable_timestamp() {
        let review = sample_review("yesterday");
        assert!(review.posted_at().is_none());
    }

    #[test]
    fn test_null_comment_becomes_empty() {
        let json = r#"{
            "id": 7,
            "username": "alice",
            "rating": 3,
            "comment": null,
            "timestamp": "2024-06-01 10:00:00"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.comment, "");
    }

    #[test]
    fn test_draft_reset() {
        let mut draft = ReviewDraft {
            rating: 4,
            comment: "Nice".to_string(),
        };
        draft.reset();
        assert_eq!(draft, ReviewDraft::default());
    }
}
