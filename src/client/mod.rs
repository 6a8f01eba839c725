//! HTTP client wrapper
//!
//! - [`ApiClient`] - One request path shared by every resource
//! - [`ClientError`] - The single error value those requests fail with

mod error;
mod request;

pub use error::ClientError;
pub use request::{API_PREFIX, ApiClient};
