//! Resource access: queries and mutations over the RepuLink API
//!
//! [`RepuLinkClient`] owns the request layer, the cache and the policy
//! table. Resource handles borrow it:
//!
//! - [`Endorsements`] - endorsement lists and creation
//! - [`Interactions`] - interaction lists, requests and responses
//! - [`Ratings`] - ratings of an interaction
//! - [`Users`] - user search and the signed-in user
//!
//! Queries consult the cache first and store what they fetch. Identical
//! queries in flight at the same time share one request. Mutations
//! invalidate the keys they may have changed once their response is in.

mod endorsements;
mod interactions;
mod ratings;
mod users;

pub use endorsements::Endorsements;
pub use interactions::{InteractionFilter, Interactions};
pub use ratings::Ratings;
pub use users::{Users, is_searchable};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::OnceCell;

use crate::adapters::ReqwestTransport;
use crate::cache::{Lookup, PolicyTable, QueryCache, QueryKey, QueryPolicy};
use crate::client::{ApiClient, ClientError};
use crate::config::ClientConfig;
use crate::core::ports::{HttpRequest, Notifier, Transport};
use crate::mutation::{MutationKind, MutationState};
use crate::session::Session;

/// Result of one fetch, shared by every caller that asked for the same key
type Flight = Arc<OnceCell<Result<Value, ClientError>>>;

/// Entry point to the RepuLink API
pub struct RepuLinkClient {
    api: ApiClient,
    cache: Mutex<QueryCache>,
    in_flight: Mutex<HashMap<QueryKey, Flight>>,
    policies: PolicyTable,
    mutations: [MutationState; 4],
    notifier: Option<Arc<dyn Notifier>>,
}

impl RepuLinkClient {
    /// Client over `transport` acting as `session`, with default policies
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, session: Session) -> Self {
        Self {
            api: ApiClient::new(transport, session),
            cache: Mutex::new(QueryCache::new()),
            in_flight: Mutex::new(HashMap::new()),
            policies: PolicyTable::default(),
            mutations: Default::default(),
            notifier: None,
        }
    }

    /// Client talking HTTP to the configured backend
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(config.api_url.clone(), config.timeout())?;
        Ok(Self::new(Arc::new(transport), config.session())
            .with_policies(PolicyTable::from_config(&config.cache)))
    }

    /// Replace the policy table
    #[must_use]
    pub fn with_policies(mut self, policies: PolicyTable) -> Self {
        self.policies = policies;
        self
    }

    /// Report mutation outcomes to `notifier`
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Endorsement queries and mutations
    #[must_use]
    pub const fn endorsements(&self) -> Endorsements<'_> {
        Endorsements::new(self)
    }

    /// Interaction queries and mutations
    #[must_use]
    pub const fn interactions(&self) -> Interactions<'_> {
        Interactions::new(self)
    }

    /// Rating queries and mutations
    #[must_use]
    pub const fn ratings(&self) -> Ratings<'_> {
        Ratings::new(self)
    }

    /// User search
    #[must_use]
    pub const fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    /// Session in use
    #[must_use]
    pub const fn session(&self) -> &Session {
        self.api.session()
    }

    /// Policy table in use
    #[must_use]
    pub const fn policies(&self) -> &PolicyTable {
        &self.policies
    }

    /// Whether a `kind` mutation is in flight
    #[must_use]
    pub fn is_pending(&self, kind: MutationKind) -> bool {
        self.mutation(kind).is_pending()
    }

    /// Error message of the last failed `kind` mutation
    #[must_use]
    pub fn last_error(&self, kind: MutationKind) -> Option<String> {
        self.mutation(kind).last_error()
    }

    /// Last cached value for `key`, fresh or not
    #[must_use]
    pub fn cached(&self, key: &QueryKey) -> Option<Value> {
        self.cache().peek(key).cloned()
    }

    /// Whether `key` has been invalidated since it was fetched
    #[must_use]
    pub fn is_invalidated(&self, key: &QueryKey) -> bool {
        self.cache().is_invalidated(key)
    }

    /// Mark everything under `prefix` stale
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        self.cache().invalidate(prefix)
    }

    fn cache(&self) -> MutexGuard<'_, QueryCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn in_flight(&self) -> MutexGuard<'_, HashMap<QueryKey, Flight>> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn mutation(&self, kind: MutationKind) -> &MutationState {
        &self.mutations[kind.index()]
    }

    pub(crate) const fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Run a keyed query under its family's policy
    ///
    /// Serves a fresh cached value when there is one. Otherwise joins the
    /// fetch already in flight for `key`, or starts one.
    pub(crate) async fn query<T: DeserializeOwned>(
        &self,
        key: QueryKey,
        request: HttpRequest,
        fallback: Option<&str>,
    ) -> Result<T, ClientError> {
        let policy = self.policies.get(key.family());

        let lookup = self.cache().lookup(&key, policy.staleness, Instant::now());
        if let Lookup::Fresh(value) = lookup {
            debug!("cache hit {key}");
            return decode(value);
        }

        let flight = self.in_flight().entry(key.clone()).or_default().clone();
        let result = flight
            .get_or_init(|| self.fetch::<T>(&key, request, fallback, policy))
            .await
            .clone();

        let mut in_flight = self.in_flight();
        if in_flight.get(&key).is_some_and(|f| Arc::ptr_eq(f, &flight)) {
            in_flight.remove(&key);
        }
        drop(in_flight);

        decode(result?)
    }

    /// Fetch `key`, retrying transient failures as `policy` allows
    ///
    /// Only a body that decodes as `T` is cached.
    async fn fetch<T: DeserializeOwned>(
        &self,
        key: &QueryKey,
        request: HttpRequest,
        fallback: Option<&str>,
        policy: QueryPolicy,
    ) -> Result<Value, ClientError> {
        debug!("fetching {key}");

        let mut attempt = 0;
        let value: Value = loop {
            match self.api.execute(request.clone(), fallback).await {
                Ok(value) => break value,
                Err(e) if e.is_transient() && attempt < policy.retries => {
                    attempt += 1;
                    warn!("{key} failed ({e}), retry {attempt}/{}", policy.retries);
                },
                Err(e) => return Err(e),
            }
        };

        decode::<T>(value.clone())?;
        self.cache().store(key.clone(), value.clone(), Instant::now());
        Ok(value)
    }

    /// Run a mutation, then invalidate `invalidates` if it succeeded
    pub(crate) async fn mutate<T: DeserializeOwned>(
        &self,
        kind: MutationKind,
        request: HttpRequest,
        fallback: Option<&str>,
        invalidates: &[QueryKey],
    ) -> Result<T, ClientError> {
        let state = self.mutation(kind);
        let result = {
            let _pending = state.begin();
            self.api.execute::<T>(request, fallback).await
        };

        match &result {
            Ok(_) => {
                let mut cache = self.cache();
                for key in invalidates {
                    cache.invalidate(key);
                }
                drop(cache);
                if let Some(notifier) = &self.notifier {
                    notifier.success(kind.success_message());
                }
            },
            Err(e) => {
                let message = e.message();
                debug!("{kind:?} failed: {message}");
                if let Some(notifier) = &self.notifier {
                    notifier.error(&message);
                }
                state.record_error(message);
            },
        }
        result
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ClientError> {
    serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
}

impl std::fmt::Debug for RepuLinkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepuLinkClient")
            .field("api", &self.api)
            .field("policies", &self.policies)
            .finish_non_exhaustive()
    }
}
