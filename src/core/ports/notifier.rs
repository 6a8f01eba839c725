//! Notification port
//!
//! Where mutation outcomes are reported for the user to see (a toast in a
//! browser, a status line in a terminal).

/// Receives mutation outcomes
pub trait Notifier: Send + Sync {
    /// A mutation succeeded
    fn success(&self, message: &str);

    /// A mutation failed; `message` is the resolved error text
    fn error(&self, message: &str);
}
