//! Business logic services
//!
//! Pure derivations over domain models, with no I/O.
//!
//! - [`eligibility`] - Which actions a viewer may take on an interaction

pub mod eligibility;

pub use eligibility::{Direction, Eligibility, InteractionView, PendingRole, has_rated};
