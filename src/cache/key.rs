//! Composite cache keys
//!
//! A key is a family plus an ordered list of parts, written like
//! `["interactions","u1"]`. Invalidation works on prefixes: invalidating
//! `["interactions"]` marks every interactions key stale.

use serde::Serialize;

/// Top-level grouping of queries; each family has one policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum QueryFamily {
    /// Endorsement lists
    Endorsements,
    /// Interaction lists
    Interactions,
    /// Ratings of one interaction
    Ratings,
    /// User search results
    UserSearch,
    /// The signed-in user
    CurrentUser,
}

impl QueryFamily {
    /// Name used as the first key part
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Endorsements => "endorsements",
            Self::Interactions => "interactions",
            Self::Ratings => "ratings",
            Self::UserSearch => "userSearch",
            Self::CurrentUser => "currentUser",
        }
    }
}

/// Identifier a query result is stored under
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct QueryKey {
    family: QueryFamily,
    parts: Vec<String>,
}

impl QueryKey {
    /// Key covering a whole family
    #[must_use]
    pub const fn family_root(family: QueryFamily) -> Self {
        Self {
            family,
            parts: Vec::new(),
        }
    }

    /// Key with the given parts after the family
    #[must_use]
    pub fn new<I, S>(family: QueryFamily, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            family,
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    /// Append one part
    #[must_use]
    pub fn with(mut self, part: impl Into<String>) -> Self {
        self.parts.push(part.into());
        self
    }

    /// Family of this key
    #[must_use]
    pub const fn family(&self) -> QueryFamily {
        self.family
    }

    /// Parts after the family
    #[must_use]
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Whether `prefix` names this key or one of its ancestors
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.family == prefix.family && self.parts.starts_with(&prefix.parts)
    }

    // === Keys used by the resources ===

    /// `["endorsements","endorsed-by-me"]`
    #[must_use]
    pub fn endorsed_by_me() -> Self {
        Self::new(QueryFamily::Endorsements, ["endorsed-by-me"])
    }

    /// `["endorsements","endorsing-me"]`
    #[must_use]
    pub fn endorsing_me() -> Self {
        Self::new(QueryFamily::Endorsements, ["endorsing-me"])
    }

    /// `["endorsements",<user>,"endorsed-by"]`
    #[must_use]
    pub fn endorsed_by_user(user_id: &str) -> Self {
        Self::new(QueryFamily::Endorsements, [user_id, "endorsed-by"])
    }

    /// `["endorsements",<user>,"endorsers"]`
    #[must_use]
    pub fn endorsers_of(user_id: &str) -> Self {
        Self::new(QueryFamily::Endorsements, [user_id, "endorsers"])
    }

    /// `["interactions",<user>]`
    #[must_use]
    pub fn user_interactions(user_id: &str) -> Self {
        Self::new(QueryFamily::Interactions, [user_id])
    }

    /// `["ratings",<interaction>]`
    #[must_use]
    pub fn ratings(interaction_id: &str) -> Self {
        Self::new(QueryFamily::Ratings, [interaction_id])
    }

    /// `["userSearch",<query>]`
    #[must_use]
    pub fn user_search(query: &str) -> Self {
        Self::new(QueryFamily::UserSearch, [query])
    }

    /// `["currentUser"]`
    #[must_use]
    pub const fn current_user() -> Self {
        Self::family_root(QueryFamily::CurrentUser)
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}", self.family.as_str())?;
        for part in &self.parts {
            write!(f, ",{part:?}")?;
        }
        write!(f, "]")
    }
}
