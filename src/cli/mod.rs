//! CLI layer for repulink
//!
//! This module contains the command-line interface:
//!
//! - [`app`] - CLI definitions and entry point
//! - [`commands`] - Command implementations
//! - [`notifier`] - Terminal notifications for mutation outcomes

pub mod app;
pub mod commands;
pub mod notifier;

// Re-export main entry point
pub use app::run;
