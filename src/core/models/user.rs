//! Public user records returned by search

use serde::{Deserialize, Serialize};

/// A user as exposed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPublic {
    /// User ID
    pub id: String,
    /// Email address
    pub email: String,
    /// Optional display name
    #[serde(default)]
    pub full_name: Option<String>,
    /// Whether the account is active
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Whether the account has admin rights
    #[serde(default)]
    pub is_superuser: bool,
}

const fn default_true() -> bool {
    true
}

impl UserPublic {
    /// Name to show for this user: full name when set, email otherwise
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.email)
    }
}

/// Search result page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersPublic {
    /// Matching users
    pub data: Vec<UserPublic>,
    /// Number of matches
    pub count: usize,
}

impl UsersPublic {
    /// The result of a search that was never sent
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            data: Vec::new(),
            count: 0,
        }
    }

    /// Whether there are no matches
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
