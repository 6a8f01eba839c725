//! Endorsements: directed, confidence-weighted trust edges

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// An endorsement from `endorser_id` toward `endorsed_id`
///
/// List endpoints join the counterpart's email and name onto each row. The
/// create endpoint returns the bare record, so those fields default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endorsement {
    /// Endorsement ID
    pub id: String,
    /// Who endorses
    pub endorser_id: String,
    /// Who is endorsed
    pub endorsed_id: String,
    /// Confidence weight in `[0, 1]`
    pub confidence: f64,
    /// Creation time
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Last update (an endorsement is replaced when re-submitted)
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    /// Email of the other party
    #[serde(default)]
    pub user_email: String,
    /// Name of the other party
    #[serde(default)]
    pub user_full_name: Option<String>,
}

impl Endorsement {
    /// Name to show for the other party
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user_full_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.user_email)
    }
}

/// Payload for creating (or replacing) an endorsement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEndorsement {
    /// User to endorse
    pub endorsed_id: String,
    /// Confidence weight in `[0, 1]`
    pub confidence: f64,
}

impl NewEndorsement {
    /// Build a payload
    #[must_use]
    pub fn new(endorsed_id: impl Into<String>, confidence: f64) -> Self {
        Self {
            endorsed_id: endorsed_id.into(),
            confidence,
        }
    }
}
