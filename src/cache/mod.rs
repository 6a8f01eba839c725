//! Query cache and invalidation policy
//!
//! - [`key`] - Composite keys and their families
//! - [`policy`] - The freshness/retry table
//! - [`store`] - Where results live between fetches

pub mod key;
pub mod policy;
pub mod store;

pub use key::{QueryFamily, QueryKey};
pub use policy::{DEFAULT_POLICIES, PolicyTable, QueryPolicy, SEARCH_STALE_AFTER, Staleness};
pub use store::{Lookup, QueryCache};
