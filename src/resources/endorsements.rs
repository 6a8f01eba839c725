//! Endorsement queries and mutations

use crate::cache::{QueryFamily, QueryKey};
use crate::client::ClientError;
use crate::core::models::{Endorsement, NewEndorsement};
use crate::mutation::MutationKind;

use super::RepuLinkClient;

/// Endorsement access for the signed-in user
#[derive(Debug, Clone, Copy)]
pub struct Endorsements<'a> {
    client: &'a RepuLinkClient,
}

impl<'a> Endorsements<'a> {
    pub(super) const fn new(client: &'a RepuLinkClient) -> Self {
        Self { client }
    }

    /// Endorsements the signed-in user has given
    pub async fn endorsed_by_me(&self) -> Result<Vec<Endorsement>, ClientError> {
        let request = self.client.api().get("/endorsements/endorsed-by-me");
        self.client
            .query(QueryKey::endorsed_by_me(), request, Some("Failed to fetch endorsements"))
            .await
    }

    /// Endorsements the signed-in user has received
    pub async fn endorsing_me(&self) -> Result<Vec<Endorsement>, ClientError> {
        let request = self.client.api().get("/endorsements/endorsing-me");
        self.client
            .query(QueryKey::endorsing_me(), request, Some("Failed to fetch endorsers"))
            .await
    }

    /// Endorsements given by `user_id`; empty without a user
    pub async fn endorsed_by_user(
        &self,
        user_id: Option<&str>,
    ) -> Result<Vec<Endorsement>, ClientError> {
        let Some(user_id) = user_id.filter(|u| !u.is_empty()) else {
            return Ok(Vec::new());
        };
        let path = format!("/endorsements/{}/endorsed-by", urlencoding::encode(user_id));
        let request = self.client.api().get(&path);
        self.client
            .query(QueryKey::endorsed_by_user(user_id), request, Some("Failed to fetch endorsements"))
            .await
    }

    /// Endorsements received by `user_id`; empty without a user
    pub async fn endorsers_of(&self, user_id: Option<&str>) -> Result<Vec<Endorsement>, ClientError> {
        let Some(user_id) = user_id.filter(|u| !u.is_empty()) else {
            return Ok(Vec::new());
        };
        let path = format!("/endorsements/{}/endorsers", urlencoding::encode(user_id));
        let request = self.client.api().get(&path);
        self.client
            .query(QueryKey::endorsers_of(user_id), request, Some("Failed to fetch endorsers"))
            .await
    }

    /// Create (or replace) an endorsement
    ///
    /// Invalidates every endorsement list, since either direction may change.
    pub async fn create(&self, payload: &NewEndorsement) -> Result<Endorsement, ClientError> {
        let request = self.client.api().post("/endorsements/", Some(payload))?;
        self.client
            .mutate(
                MutationKind::CreateEndorsement,
                request,
                Some("Failed to create endorsement"),
                &[QueryKey::family_root(QueryFamily::Endorsements)],
            )
            .await
    }

    /// Whether a create call is in flight
    #[must_use]
    pub fn is_creating(&self) -> bool {
        self.client.is_pending(MutationKind::CreateEndorsement)
    }
}
