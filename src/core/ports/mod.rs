//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the client core and the
//! systems around it: the network and whatever shows notifications.
//!
//! Implementations live in the `adapters` module (and in tests).

mod notifier;
mod transport;

pub use notifier::Notifier;
pub use transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};
