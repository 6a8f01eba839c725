//! User search and the signed-in user

use crate::cache::QueryKey;
use crate::client::ClientError;
use crate::core::models::{UserPublic, UsersPublic};

use super::RepuLinkClient;

/// Whether `query` would be sent; empty and whitespace-only queries are not
#[must_use]
pub fn is_searchable(query: Option<&str>) -> bool {
    query.is_some_and(|q| !q.trim().is_empty())
}

/// User access
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a RepuLinkClient,
}

impl<'a> Users<'a> {
    pub(super) const fn new(client: &'a RepuLinkClient) -> Self {
        Self { client }
    }

    /// Search users by name or email
    ///
    /// Blank queries resolve to an empty page without a request. The query is
    /// sent and cached as typed.
    pub async fn search(&self, query: Option<&str>) -> Result<UsersPublic, ClientError> {
        let Some(query) = query.filter(|q| !q.trim().is_empty()) else {
            return Ok(UsersPublic::empty());
        };
        let request = self.client.api().get("/users/search").query("query", query);
        self.client.query(QueryKey::user_search(query), request, None).await
    }

    /// The user the session's token belongs to
    pub async fn me(&self) -> Result<UserPublic, ClientError> {
        let request = self.client.api().get("/users/me");
        self.client.query(QueryKey::current_user(), request, None).await
    }

    /// Viewer ID: from the session when configured, else from the backend
    pub async fn viewer_id(&self) -> Result<String, ClientError> {
        if let Some(id) = self.client.session().viewer_id() {
            return Ok(id.to_string());
        }
        Ok(self.me().await?.id)
    }
}
