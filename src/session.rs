//! Explicit session context
//!
//! Carries the bearer token (and, when known, the viewer's user ID) into the
//! request layer. Whoever builds the client decides where these come from;
//! nothing here reads ambient state.

/// Credentials and identity for outgoing requests
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user_id: Option<String>,
}

impl Session {
    /// A session without credentials; requests go out unauthenticated
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session holding `token`; blank tokens count as none
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::default().token(Some(token.into()))
    }

    /// Replace the token
    #[must_use]
    pub fn token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Set the viewer's user ID
    #[must_use]
    pub fn user_id(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id.filter(|u| !u.trim().is_empty());
        self
    }

    /// `Authorization` header value, if there is a token
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    /// Whether a token is present
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Viewer's user ID, if configured
    #[must_use]
    pub fn viewer_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user_id", &self.user_id)
            .finish()
    }
}
