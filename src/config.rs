//! Client configuration
//!
//! Where the backend lives, which credentials to send and how to tune the
//! cache. Stored at `~/.repulink/config.toml`; environment variables win over
//! the file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::paths;
use crate::session::Session;

/// Environment variable overriding `api_url`
pub const ENV_API_URL: &str = "REPULINK_API_URL";

/// Environment variable overriding `token`
pub const ENV_TOKEN: &str = "REPULINK_TOKEN";

/// Environment variable overriding `user_id`
pub const ENV_USER_ID: &str = "REPULINK_USER_ID";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL (without `/api/v1`)
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Bearer token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Viewer's user ID; looked up from the backend when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Cache policy overrides
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Cache policy overrides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Seconds a search result may be reused (0 disables reuse)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_stale_secs: Option<u64>,
    /// Retries for endorsement queries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endorsement_retries: Option<u32>,
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            token: None,
            user_id: None,
            cache: CacheConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the default location, then apply the environment
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path()).with_env()
    }

    /// Load config from `path`, or defaults if it is missing or unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match fs::read_to_string(path).map(|content| toml::from_str(&content)) {
            Ok(Ok(config)) => config,
            Ok(Err(e)) => {
                warn!("ignoring malformed config {}: {e}", path.display());
                Self::default()
            },
            Err(e) => {
                warn!("could not read config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply `REPULINK_*` environment overrides
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_overrides(
            std::env::var(ENV_API_URL).ok(),
            std::env::var(ENV_TOKEN).ok(),
            std::env::var(ENV_USER_ID).ok(),
        )
    }

    /// Apply explicit overrides; blank values are ignored
    #[must_use]
    pub fn with_overrides(
        mut self,
        api_url: Option<String>,
        token: Option<String>,
        user_id: Option<String>,
    ) -> Self {
        if let Some(url) = api_url.filter(|v| !v.trim().is_empty()) {
            self.api_url = url;
        }
        if let Some(token) = token.filter(|v| !v.trim().is_empty()) {
            self.token = Some(token);
        }
        if let Some(user_id) = user_id.filter(|v| !v.trim().is_empty()) {
            self.user_id = Some(user_id);
        }
        self
    }

    /// Request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Session built from the configured credentials
    #[must_use]
    pub fn session(&self) -> Session {
        Session::anonymous().token(self.token.clone()).user_id(self.user_id.clone())
    }
}
