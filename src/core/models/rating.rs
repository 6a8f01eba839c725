//! Ratings attached to accepted interactions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Lowest accepted score
pub const RATING_MIN: i8 = -5;

/// Highest accepted score
pub const RATING_MAX: i8 = 5;

/// A participant's score for an interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Rating ID
    pub id: String,
    /// Rated interaction
    pub interaction_id: String,
    /// Who rated
    pub rater_id: String,
    /// Score in `[-5, 5]`
    pub rating: i8,
    /// Optional free text
    #[serde(default)]
    pub comment: Option<String>,
    /// When it was submitted
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Rater email (list endpoint only)
    #[serde(default)]
    pub rater_email: String,
    /// Rater name (list endpoint only)
    #[serde(default)]
    pub rater_full_name: Option<String>,
}

impl Rating {
    /// Name to show for the rater
    #[must_use]
    pub fn rater_name(&self) -> &str {
        self.rater_full_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.rater_email)
    }

    /// Score formatted with an explicit sign, e.g. `+3/5`
    #[must_use]
    pub fn signed_score(&self) -> String {
        if self.rating > 0 {
            format!("+{}/{RATING_MAX}", self.rating)
        } else {
            format!("{}/{RATING_MAX}", self.rating)
        }
    }
}

/// Payload for rating an interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRating {
    /// Score in `[-5, 5]`
    pub rating: i8,
    /// Optional free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl NewRating {
    /// Score without a comment
    #[must_use]
    pub const fn new(rating: i8) -> Self {
        Self {
            rating,
            comment: None,
        }
    }

    /// Attach a comment; blank comments are dropped
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        let comment = comment.into();
        self.comment = (!comment.trim().is_empty()).then_some(comment);
        self
    }
}
