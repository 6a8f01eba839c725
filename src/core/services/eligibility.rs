//! Interaction eligibility
//!
//! Decides, once per interaction and viewer, which actions a viewer may take.
//! The backend enforces the same rules; this only keeps the client from
//! offering actions that are bound to be rejected.

use crate::core::models::{Interaction, InteractionStatus, Rating};

/// The viewer's relation to a pending interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingRole {
    /// Viewer received the request and may answer it
    AsTarget,
    /// Viewer sent the request and is waiting
    AsInitiator,
    /// Viewer is not a party
    Observer,
}

/// What a viewer may do with an interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// Awaiting a response
    Pending(PendingRole),
    /// Accepted; rating is possible until the viewer has rated
    Accepted {
        /// Whether the viewer already has a rating row
        has_rated: bool,
    },
    /// Declined; nothing left to do
    Denied,
}

impl Eligibility {
    /// Classify `interaction` for `viewer_id`
    ///
    /// `ratings` are the fetched ratings of this interaction; they are only
    /// consulted when it is accepted.
    #[must_use]
    pub fn compute(interaction: &Interaction, viewer_id: &str, ratings: &[Rating]) -> Self {
        match interaction.status {
            InteractionStatus::Pending => {
                let role = if interaction.target_id == viewer_id {
                    PendingRole::AsTarget
                } else if interaction.initiator_id == viewer_id {
                    PendingRole::AsInitiator
                } else {
                    PendingRole::Observer
                };
                Self::Pending(role)
            },
            InteractionStatus::Accepted => Self::Accepted {
                has_rated: has_rated(ratings, viewer_id),
            },
            InteractionStatus::Denied => Self::Denied,
        }
    }

    /// Whether accept/deny should be offered
    #[must_use]
    pub const fn can_respond(self) -> bool {
        matches!(self, Self::Pending(PendingRole::AsTarget))
    }

    /// Whether the rating form should be offered
    #[must_use]
    pub const fn can_rate(self) -> bool {
        matches!(self, Self::Accepted { has_rated: false })
    }

    /// Whether existing ratings are worth showing
    #[must_use]
    pub const fn shows_ratings(self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Whether `viewer_id` already rated, by scanning the fetched rows
#[must_use]
pub fn has_rated(ratings: &[Rating], viewer_id: &str) -> bool {
    ratings.iter().any(|r| r.rater_id == viewer_id)
}

/// Which way an interaction points, seen from the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Viewer is the initiator
    Sent,
    /// Viewer is the target (or not a party)
    Received,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sent => write!(f, "Sent"),
            Self::Received => write!(f, "Received"),
        }
    }
}

/// An interaction with everything derived from the viewer computed up front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionView<'a> {
    /// The interaction
    pub interaction: &'a Interaction,
    /// Sent or received
    pub direction: Direction,
    /// ID of the other party
    pub counterpart_id: &'a str,
    /// Allowed actions
    pub eligibility: Eligibility,
}

impl<'a> InteractionView<'a> {
    /// Derive the view for `viewer_id`
    #[must_use]
    pub fn new(interaction: &'a Interaction, viewer_id: &str, ratings: &[Rating]) -> Self {
        let direction = if interaction.initiator_id == viewer_id {
            Direction::Sent
        } else {
            Direction::Received
        };
        let counterpart_id = match direction {
            Direction::Sent => interaction.target_id.as_str(),
            Direction::Received => interaction.initiator_id.as_str(),
        };
        Self {
            interaction,
            direction,
            counterpart_id,
            eligibility: Eligibility::compute(interaction, viewer_id, ratings),
        }
    }

    /// First eight characters of the counterpart ID, for compact tables
    #[must_use]
    pub fn short_counterpart(&self) -> &'a str {
        let end = self
            .counterpart_id
            .char_indices()
            .nth(8)
            .map_or(self.counterpart_id.len(), |(i, _)| i);
        &self.counterpart_id[..end]
    }
}
