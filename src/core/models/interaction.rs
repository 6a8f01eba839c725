//! Interactions: directed connection requests between two users

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Interaction lifecycle, owned by the backend
///
/// `pending` moves to `accepted` or `denied`; both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionStatus {
    /// Waiting for the target to respond
    #[default]
    Pending,
    /// Target accepted; participants may rate it
    Accepted,
    /// Target declined
    Denied,
}

impl InteractionStatus {
    /// Whether no further transitions exist
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Whether the backend allows moving from `self` to `next`
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!((self, next), (Self::Pending, Self::Accepted | Self::Denied))
    }

    /// The status a respond call with `accept` leads to
    #[must_use]
    pub const fn from_response(accept: bool) -> Self {
        if accept { Self::Accepted } else { Self::Denied }
    }
}

impl std::fmt::Display for InteractionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Accepted => write!(f, "accepted"),
            Self::Denied => write!(f, "denied"),
        }
    }
}

impl std::str::FromStr for InteractionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "denied" => Ok(Self::Denied),
            _ => Err(format!("Invalid status: {s}. Use: pending, accepted, denied")),
        }
    }
}

/// An interaction request from `initiator_id` to `target_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// Interaction ID
    pub id: String,
    /// Who sent the request
    pub initiator_id: String,
    /// Who received it
    pub target_id: String,
    /// Optional note from the initiator
    #[serde(default)]
    pub message: Option<String>,
    /// Current status
    #[serde(default)]
    pub status: InteractionStatus,
    /// When it was sent
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Interaction {
    /// Whether `user_id` is one of the two parties
    #[must_use]
    pub fn involves(&self, user_id: &str) -> bool {
        self.initiator_id == user_id || self.target_id == user_id
    }
}

/// Payload for sending an interaction request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInteraction {
    /// Recipient
    pub target_id: String,
    /// Optional note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NewInteraction {
    /// Request without a message
    #[must_use]
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            message: None,
        }
    }

    /// Attach a message; blank messages are dropped
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.message = (!message.trim().is_empty()).then_some(message);
        self
    }
}

/// Which side of an interaction to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionRole {
    /// Interactions the user sent
    Initiator,
    /// Interactions the user received
    Target,
}

impl InteractionRole {
    /// Query-string value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initiator => "initiator",
            Self::Target => "target",
        }
    }
}

impl std::str::FromStr for InteractionRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "initiator" | "sent" => Ok(Self::Initiator),
            "target" | "received" => Ok(Self::Target),
            _ => Err(format!("Invalid role: {s}. Use: initiator, target")),
        }
    }
}

/// Body of a respond call
///
/// Depending on the backend version this is either the updated interaction
/// or a short `{"message": "Interaction accepted"}` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RespondOutcome {
    /// The updated interaction
    Interaction(Interaction),
    /// A status acknowledgement
    Message {
        /// Acknowledgement text
        message: String,
    },
}

impl RespondOutcome {
    /// Resulting status, when the response states it
    #[must_use]
    pub fn status(&self) -> Option<InteractionStatus> {
        match self {
            Self::Interaction(interaction) => Some(interaction.status),
            Self::Message { message } => {
                message.split_whitespace().last().and_then(|word| word.parse().ok())
            },
        }
    }
}
