//! Client error types
//!
//! Every failure collapses into one value that carries a message fit for
//! showing to the user. The variant records where it came from.

use serde::Deserialize;
use thiserror::Error;

use crate::core::ports::TransportError;

/// A failed request
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// No response (network down, timeout)
    #[error("{0}")]
    Transport(#[from] TransportError),

    /// The backend answered with a non-2xx status
    #[error("{message}")]
    Api {
        /// HTTP status
        status: u16,
        /// Resolved message (`detail`, fallback, or reason phrase)
        message: String,
    },

    /// A JSON body that could not be encoded or decoded
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Message for the error display path
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status, for API errors
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether retrying might help: transport failures and 5xx
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Api { status, .. } => *status >= 500,
            Self::Decode(_) => false,
        }
    }

    /// Build an API error from a non-2xx response
    ///
    /// The message is the body's `detail` when it has one, else `fallback`,
    /// else the reason phrase, else a generic line naming the status.
    #[must_use]
    pub fn from_response(status: u16, reason: &str, body: &[u8], fallback: Option<&str>) -> Self {
        let message = detail_message(body)
            .or_else(|| fallback.map(str::to_string))
            .or_else(|| (!reason.is_empty()).then(|| reason.to_string()))
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        Self::Api { status, message }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Detail>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Text(String),
    Validation(Vec<ValidationIssue>),
}

#[derive(Deserialize)]
struct ValidationIssue {
    msg: String,
}

/// Pull a message out of a `{"detail": ...}` error body
///
/// FastAPI sends either a string or a list of validation issues; for the
/// list form the first issue's `msg` is used.
fn detail_message(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    let message = match parsed.detail? {
        Detail::Text(text) => text,
        Detail::Validation(issues) => issues.into_iter().next()?.msg,
    };
    (!message.is_empty()).then_some(message)
}
