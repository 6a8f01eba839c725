//! Freshness and retry policy
//!
//! One table decides, per query family, how long a cached result may be
//! served without refetching and how many times a transient failure is
//! retried. Resources never carry their own numbers.

use std::collections::HashMap;
use std::time::Duration;

use super::key::QueryFamily;
use crate::config::CacheConfig;

/// How long a cached value stays usable without refetching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staleness {
    /// Refetch on every observation
    Always,
    /// Serve from cache until the value is this old
    After(Duration),
}

impl Staleness {
    /// Whether a value of this age may be served as-is
    #[must_use]
    pub fn is_fresh(self, age: Duration) -> bool {
        match self {
            Self::Always => false,
            Self::After(ttl) => age < ttl,
        }
    }
}

/// Policy for one query family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryPolicy {
    /// Freshness window
    pub staleness: Staleness,
    /// Extra attempts after a transient failure
    pub retries: u32,
}

impl QueryPolicy {
    /// Policy with no caching and no retry
    #[must_use]
    pub const fn always_stale() -> Self {
        Self {
            staleness: Staleness::Always,
            retries: 0,
        }
    }
}

/// Default search cache window
pub const SEARCH_STALE_AFTER: Duration = Duration::from_secs(60);

/// Built-in policies
///
/// Endorsement lists retry once; no other family retries.
pub const DEFAULT_POLICIES: &[(QueryFamily, QueryPolicy)] = &[
    (
        QueryFamily::Endorsements,
        QueryPolicy {
            staleness: Staleness::Always,
            retries: 1,
        },
    ),
    (
        QueryFamily::Interactions,
        QueryPolicy {
            staleness: Staleness::Always,
            retries: 0,
        },
    ),
    (
        QueryFamily::Ratings,
        QueryPolicy {
            staleness: Staleness::Always,
            retries: 0,
        },
    ),
    (
        QueryFamily::UserSearch,
        QueryPolicy {
            staleness: Staleness::After(SEARCH_STALE_AFTER),
            retries: 0,
        },
    ),
    (
        QueryFamily::CurrentUser,
        QueryPolicy {
            staleness: Staleness::After(Duration::from_secs(300)),
            retries: 0,
        },
    ),
];

/// Lookup table from family to policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyTable {
    policies: HashMap<QueryFamily, QueryPolicy>,
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self {
            policies: DEFAULT_POLICIES.iter().copied().collect(),
        }
    }
}

impl PolicyTable {
    /// Defaults with the config file's overrides applied
    #[must_use]
    pub fn from_config(config: &CacheConfig) -> Self {
        let mut table = Self::default();
        if let Some(secs) = config.search_stale_secs {
            let staleness = if secs == 0 {
                Staleness::Always
            } else {
                Staleness::After(Duration::from_secs(secs))
            };
            table.policies.entry(QueryFamily::UserSearch).and_modify(|p| p.staleness = staleness);
        }
        if let Some(retries) = config.endorsement_retries {
            table.policies.entry(QueryFamily::Endorsements).and_modify(|p| p.retries = retries);
        }
        table
    }

    /// Policy for `family`
    #[must_use]
    pub fn get(&self, family: QueryFamily) -> QueryPolicy {
        self.policies.get(&family).copied().unwrap_or_else(QueryPolicy::always_stale)
    }

    /// Replace the policy for `family`
    #[must_use]
    pub fn with(mut self, family: QueryFamily, policy: QueryPolicy) -> Self {
        self.policies.insert(family, policy);
        self
    }
}
