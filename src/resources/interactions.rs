//! Interaction queries and mutations

use crate::cache::{QueryFamily, QueryKey};
use crate::client::ClientError;
use crate::core::models::{Interaction, InteractionRole, InteractionStatus, NewInteraction, RespondOutcome};
use crate::core::services::Eligibility;
use crate::mutation::MutationKind;

use super::RepuLinkClient;

/// Optional narrowing of an interaction list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionFilter {
    /// Only interactions where the user has this role
    pub role: Option<InteractionRole>,
    /// Rows to skip
    pub skip: Option<u32>,
    /// Maximum rows
    pub limit: Option<u32>,
}

impl InteractionFilter {
    /// Whether nothing is filtered
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.role.is_none() && self.skip.is_none() && self.limit.is_none()
    }

    fn key(self, user_id: &str) -> QueryKey {
        let mut key = QueryKey::user_interactions(user_id);
        if let Some(role) = self.role {
            key = key.with(format!("role={}", role.as_str()));
        }
        if let Some(skip) = self.skip {
            key = key.with(format!("skip={skip}"));
        }
        if let Some(limit) = self.limit {
            key = key.with(format!("limit={limit}"));
        }
        key
    }
}

/// Interaction access
#[derive(Debug, Clone, Copy)]
pub struct Interactions<'a> {
    client: &'a RepuLinkClient,
}

impl<'a> Interactions<'a> {
    pub(super) const fn new(client: &'a RepuLinkClient) -> Self {
        Self { client }
    }

    /// Interactions involving `user_id`; empty without a user
    pub async fn for_user(&self, user_id: Option<&str>) -> Result<Vec<Interaction>, ClientError> {
        self.for_user_filtered(user_id, InteractionFilter::default()).await
    }

    /// Interactions involving `user_id`, narrowed by `filter`
    pub async fn for_user_filtered(
        &self,
        user_id: Option<&str>,
        filter: InteractionFilter,
    ) -> Result<Vec<Interaction>, ClientError> {
        let Some(user_id) = user_id.filter(|u| !u.is_empty()) else {
            log::debug!("no user id, skipping interactions fetch");
            return Ok(Vec::new());
        };

        let path = format!("/interactions/users/{}", urlencoding::encode(user_id));
        let mut request = self.client.api().get(&path);
        if let Some(role) = filter.role {
            request = request.query("role", role.as_str());
        }
        if let Some(skip) = filter.skip {
            request = request.query("skip", skip.to_string());
        }
        if let Some(limit) = filter.limit {
            request = request.query("limit", limit.to_string());
        }

        let interactions: Vec<Interaction> =
            self.client.query(filter.key(user_id), request, None).await?;
        log::debug!("got {} interaction(s) for {user_id}", interactions.len());
        Ok(interactions)
    }

    /// Send an interaction request
    pub async fn create(&self, payload: &NewInteraction) -> Result<Interaction, ClientError> {
        let request = self.client.api().post("/interactions/", Some(payload))?;
        self.client
            .mutate(MutationKind::CreateInteraction, request, None, &[Self::family()])
            .await
    }

    /// Accept or deny an interaction
    ///
    /// The decision travels as the `accept` query parameter.
    pub async fn respond(&self, interaction_id: &str, accept: bool) -> Result<RespondOutcome, ClientError> {
        let path = format!("/interactions/{}/respond", urlencoding::encode(interaction_id));
        let request = self
            .client
            .api()
            .post::<()>(&path, None)?
            .query("accept", accept.to_string());
        self.client
            .mutate(MutationKind::RespondInteraction, request, None, &[Self::family()])
            .await
    }

    /// Eligibility of `viewer_id` on `interaction`
    ///
    /// Ratings are only fetched for accepted interactions.
    pub async fn eligibility(
        &self,
        interaction: &Interaction,
        viewer_id: &str,
    ) -> Result<Eligibility, ClientError> {
        let ratings = if interaction.status == InteractionStatus::Accepted {
            self.client.ratings().for_interaction(Some(&interaction.id)).await?
        } else {
            Vec::new()
        };
        Ok(Eligibility::compute(interaction, viewer_id, &ratings))
    }

    /// Whether a create call is in flight
    #[must_use]
    pub fn is_creating(&self) -> bool {
        self.client.is_pending(MutationKind::CreateInteraction)
    }

    /// Whether a respond call is in flight
    #[must_use]
    pub fn is_responding(&self) -> bool {
        self.client.is_pending(MutationKind::RespondInteraction)
    }

    const fn family() -> QueryKey {
        QueryKey::family_root(QueryFamily::Interactions)
    }
}
