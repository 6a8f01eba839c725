//! Core domain logic for RepuLink
//!
//! This module contains pure logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Endorsement, Interaction, Rating, UserPublic)
//! - `services/` - Derivations over those types (eligibility)
//! - `ports/` - Trait definitions for external dependencies (transport, notifier)

pub mod models;
pub mod ports;
pub mod services;
