//! Centralized path definitions for RepuLink
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.repulink/
//! └── config.toml               # API URL, token, viewer ID, cache overrides
//! ```

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".repulink";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global RepuLink directory.
///
/// Returns `~/.repulink/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.repulink/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
