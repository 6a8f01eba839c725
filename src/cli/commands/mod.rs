//! Command implementations

mod config;
mod endorse;
mod interactions;
mod rate;
mod search;

use std::sync::Arc;

use repulink::output::OutputMode;
use repulink::{ClientConfig, RepuLinkClient};

use super::notifier::ConsoleNotifier;

pub use config::config;
pub use endorse::{endorse, endorsements};
pub use interactions::{interact, interactions, respond, show};
pub use rate::{rate, ratings};
pub use search::search;

/// What every networked command needs
#[derive(Debug)]
pub struct Context {
    /// API client
    pub client: RepuLinkClient,
    /// Output mode
    pub mode: OutputMode,
    /// Terminal notifier, in human mode
    notifier: Option<Arc<ConsoleNotifier>>,
}

impl Context {
    /// Build a client from `config`; mutation outcomes go to the terminal
    pub fn new(config: &ClientConfig, mode: OutputMode) -> anyhow::Result<Self> {
        let mut client = RepuLinkClient::from_config(config)?;
        let notifier = (mode == OutputMode::Human).then(|| Arc::new(ConsoleNotifier::default()));
        if let Some(notifier) = &notifier {
            client = client.with_notifier(notifier.clone());
        }
        Ok(Self {
            client,
            mode,
            notifier,
        })
    }

    /// Whether a failure has already been shown on the terminal
    pub fn error_reported(&self) -> bool {
        self.notifier.as_ref().is_some_and(|n| n.has_reported_error())
    }
}
