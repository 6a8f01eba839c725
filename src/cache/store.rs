//! Query result store
//!
//! Results are kept as JSON values under their key. An entry remembers when
//! it was fetched and whether it has been invalidated since; the policy
//! decides what that means for the next read.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::debug;
use serde_json::Value;

use super::key::QueryKey;
use super::policy::Staleness;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    fetched_at: Instant,
    invalidated: bool,
}

/// Result of looking a key up
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// Usable without refetching
    Fresh(Value),
    /// Present but due for a refetch
    Stale(Value),
    /// Never fetched (or removed)
    Missing,
}

/// In-memory query cache
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
}

impl QueryCache {
    /// Empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look `key` up at time `now` under `staleness`
    #[must_use]
    pub fn lookup(&self, key: &QueryKey, staleness: Staleness, now: Instant) -> Lookup {
        match self.entries.get(key) {
            None => Lookup::Missing,
            Some(entry) => {
                let age = now.saturating_duration_since(entry.fetched_at);
                if !entry.invalidated && staleness.is_fresh(age) {
                    Lookup::Fresh(entry.value.clone())
                } else {
                    Lookup::Stale(entry.value.clone())
                }
            },
        }
    }

    /// Store a freshly fetched value
    pub fn store(&mut self, key: QueryKey, value: Value, now: Instant) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                fetched_at: now,
                invalidated: false,
            },
        );
    }

    /// Mark every entry under `prefix` stale; returns how many were marked
    ///
    /// Values are kept so observers can still show them while a refetch runs.
    pub fn invalidate(&mut self, prefix: &QueryKey) -> usize {
        let mut marked = 0;
        for (key, entry) in &mut self.entries {
            if key.starts_with(prefix) {
                entry.invalidated = true;
                marked += 1;
            }
        }
        debug!("invalidated {marked} entr(ies) under {prefix}");
        marked
    }

    /// Last stored value for `key`, regardless of freshness
    #[must_use]
    pub fn peek(&self, key: &QueryKey) -> Option<&Value> {
        self.entries.get(key).map(|e| &e.value)
    }

    /// Whether `key` is present and marked invalidated
    #[must_use]
    pub fn is_invalidated(&self, key: &QueryKey) -> bool {
        self.entries.get(key).is_some_and(|e| e.invalidated)
    }

    /// Age of the entry for `key`
    #[must_use]
    pub fn age(&self, key: &QueryKey, now: Instant) -> Option<Duration> {
        self.entries.get(key).map(|e| now.saturating_duration_since(e.fetched_at))
    }

    /// Drop the entry for `key`
    pub fn remove(&mut self, key: &QueryKey) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Drop everything
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
