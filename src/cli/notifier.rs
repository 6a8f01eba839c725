//! Terminal notifier
//!
//! Prints mutation outcomes to stderr so they never mix with `--json` output.

use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use repulink::core::ports::Notifier;

/// Writes success and error lines to stderr
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    reported_error: AtomicBool,
}

impl ConsoleNotifier {
    /// Whether an error line has been printed
    pub fn has_reported_error(&self) -> bool {
        self.reported_error.load(Ordering::Relaxed)
    }
}

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        eprintln!("{} {message}", "✓".green());
    }

    fn error(&self, message: &str) {
        self.reported_error.store(true, Ordering::Relaxed);
        eprintln!("{} {message}", "✗".red());
    }
}
