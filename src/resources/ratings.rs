//! Rating queries and mutations

use crate::cache::{QueryFamily, QueryKey};
use crate::client::ClientError;
use crate::core::models::{NewRating, Rating};
use crate::core::services::has_rated;
use crate::mutation::MutationKind;

use super::RepuLinkClient;

/// Rating access
#[derive(Debug, Clone, Copy)]
pub struct Ratings<'a> {
    client: &'a RepuLinkClient,
}

impl<'a> Ratings<'a> {
    pub(super) const fn new(client: &'a RepuLinkClient) -> Self {
        Self { client }
    }

    /// Ratings of `interaction_id`; empty without an interaction
    pub async fn for_interaction(&self, interaction_id: Option<&str>) -> Result<Vec<Rating>, ClientError> {
        let Some(interaction_id) = interaction_id.filter(|i| !i.is_empty()) else {
            return Ok(Vec::new());
        };
        let path = format!("/interactions/{}/ratings", urlencoding::encode(interaction_id));
        let request = self.client.api().get(&path);
        self.client.query(QueryKey::ratings(interaction_id), request, None).await
    }

    /// Whether `viewer_id` has rated `interaction_id`, per a fresh ratings fetch
    pub async fn has_rated(&self, interaction_id: &str, viewer_id: &str) -> Result<bool, ClientError> {
        let ratings = self.for_interaction(Some(interaction_id)).await?;
        Ok(has_rated(&ratings, viewer_id))
    }

    /// Rate an interaction
    ///
    /// Invalidates interaction lists and this interaction's ratings.
    pub async fn add(&self, interaction_id: &str, payload: &NewRating) -> Result<Rating, ClientError> {
        let path = format!("/interactions/{}/rating", urlencoding::encode(interaction_id));
        let request = self.client.api().post(&path, Some(payload))?;
        self.client
            .mutate(
                MutationKind::AddRating,
                request,
                None,
                &[
                    QueryKey::family_root(QueryFamily::Interactions),
                    QueryKey::ratings(interaction_id),
                ],
            )
            .await
    }

    /// Whether an add call is in flight
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.client.is_pending(MutationKind::AddRating)
    }
}
