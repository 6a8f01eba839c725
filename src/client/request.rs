//! Shared request capability
//!
//! Every resource goes through [`ApiClient`]: it attaches the session's
//! bearer token, marks JSON bodies, sends through the transport and turns the
//! response into either a decoded value or a [`ClientError`].

use std::sync::Arc;

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ClientError;
use crate::core::ports::{HttpRequest, Transport};
use crate::session::Session;

/// Prefix of every backend route
pub const API_PREFIX: &str = "/api/v1";

/// Builds, sends and decodes API requests
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    session: Session,
}

impl ApiClient {
    /// Create a client over `transport` acting as `session`
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, session: Session) -> Self {
        Self { transport, session }
    }

    /// Session in use
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// GET request for an API path (relative to [`API_PREFIX`])
    #[must_use]
    pub fn get(&self, path: &str) -> HttpRequest {
        self.authorize(HttpRequest::get(format!("{API_PREFIX}{path}")))
    }

    /// POST request for an API path, with an optional JSON body
    pub fn post<B: Serialize>(&self, path: &str, body: Option<&B>) -> Result<HttpRequest, ClientError> {
        let mut request = HttpRequest::post(format!("{API_PREFIX}{path}"));
        if let Some(body) = body {
            let value = serde_json::to_value(body).map_err(|e| ClientError::Decode(e.to_string()))?;
            request = request.header("Content-Type", "application/json").json(value);
        }
        Ok(self.authorize(request))
    }

    fn authorize(&self, request: HttpRequest) -> HttpRequest {
        match self.session.authorization() {
            Some(value) => request.header("Authorization", value),
            None => request,
        }
    }

    /// Send `request` and decode a 2xx body as `T`
    ///
    /// `fallback` is the message used when an error body carries no `detail`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
        fallback: Option<&str>,
    ) -> Result<T, ClientError> {
        let label = format!("{} {}", request.method, request.path);
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let err = ClientError::from_response(
                response.status,
                &response.reason,
                &response.body,
                fallback,
            );
            debug!("{label} failed ({}): {err}", response.status);
            return Err(err);
        }

        serde_json::from_slice(&response.body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("session", &self.session).finish_non_exhaustive()
    }
}
