//! Mutation state
//!
//! Each write operation has a pending flag that is raised for exactly as long
//! as a call is in flight, and remembers the last error message. Nothing here
//! deduplicates; callers that want single submission check the flag.

use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::{AtomicUsize, Ordering};

/// The write operations the client exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    /// Create or replace an endorsement
    CreateEndorsement,
    /// Send an interaction request
    CreateInteraction,
    /// Accept or deny an interaction
    RespondInteraction,
    /// Rate an accepted interaction
    AddRating,
}

impl MutationKind {
    /// All kinds, in declaration order
    pub const ALL: [Self; 4] = [
        Self::CreateEndorsement,
        Self::CreateInteraction,
        Self::RespondInteraction,
        Self::AddRating,
    ];

    /// Index into per-kind tables
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::CreateEndorsement => 0,
            Self::CreateInteraction => 1,
            Self::RespondInteraction => 2,
            Self::AddRating => 3,
        }
    }

    /// Message reported on success
    #[must_use]
    pub const fn success_message(self) -> &'static str {
        match self {
            Self::CreateEndorsement => "Endorsement saved",
            Self::CreateInteraction => "Interaction request sent",
            Self::RespondInteraction => "Response recorded",
            Self::AddRating => "Rating submitted successfully!",
        }
    }
}

/// Pending flag and last error of one mutation
#[derive(Debug, Default)]
pub struct MutationState {
    in_flight: AtomicUsize,
    last_error: Mutex<Option<String>>,
}

impl MutationState {
    /// Whether a call is in flight
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Error message of the most recent failed call, cleared by a new call
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Mark a call as started; the flag drops when the guard does
    pub(crate) fn begin(&self) -> PendingGuard<'_> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        *self.last_error.lock().unwrap_or_else(PoisonError::into_inner) = None;
        PendingGuard { state: self }
    }

    pub(crate) fn record_error(&self, message: String) {
        *self.last_error.lock().unwrap_or_else(PoisonError::into_inner) = Some(message);
    }
}

/// Keeps a mutation marked pending until dropped
pub(crate) struct PendingGuard<'a> {
    state: &'a MutationState,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.state.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
