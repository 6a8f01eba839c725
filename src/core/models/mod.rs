//! Domain models for RepuLink
//!
//! Mirrors of the backend's records, plus the payloads sent to create them.
//!
//! - [`Endorsement`] - "I trust this user with confidence c"
//! - [`Interaction`] - "I'd like to connect", answered with accept/deny
//! - [`Rating`] - A -5..+5 score for an accepted interaction
//! - [`UserPublic`] - A search hit

mod endorsement;
mod interaction;
mod rating;
pub mod timestamp;
mod user;

pub use endorsement::{Endorsement, NewEndorsement};
pub use interaction::{
    Interaction, InteractionRole, InteractionStatus, NewInteraction, RespondOutcome,
};
pub use rating::{NewRating, RATING_MAX, RATING_MIN, Rating};
pub use user::{UserPublic, UsersPublic};
