//! repulink - Client for the RepuLink reputation service
//!
//! This library provides typed access to the RepuLink REST API (endorsements,
//! interactions, ratings and user search) together with a keyed query cache
//! that decides when results are reused, refetched or invalidated.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod cache;
pub mod client;
pub mod config;
pub mod core;
pub mod mutation;
pub mod output;
pub mod paths;
pub mod resources;
pub mod session;

pub use client::{ApiClient, ClientError};
pub use config::ClientConfig;
pub use mutation::MutationKind;
pub use resources::RepuLinkClient;
pub use session::Session;
