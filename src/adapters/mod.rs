//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `http/` - reqwest transport to the RepuLink backend

pub mod http;

pub use http::ReqwestTransport;
