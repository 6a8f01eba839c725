//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Endorsement, InteractionStatus, Rating, UserPublic, UsersPublic};
use crate::core::services::InteractionView;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn status_badge(status: InteractionStatus, width: usize) -> String {
    let label = format!("{:<width$}", status.to_string());
    match status {
        InteractionStatus::Pending => label.yellow().to_string(),
        InteractionStatus::Accepted => label.green().to_string(),
        InteractionStatus::Denied => label.red().to_string(),
    }
}

/// Result of a user search
#[derive(Debug, Serialize)]
pub struct SearchResult {
    /// Query as typed
    pub query: String,
    /// Matching users
    pub data: Vec<UserPublic>,
    /// Number of matches
    pub count: usize,
}

impl SearchResult {
    /// Wrap a search page
    #[must_use]
    pub fn new(query: &str, page: UsersPublic) -> Self {
        Self {
            query: query.to_string(),
            data: page.data,
            count: page.count,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.query.trim().is_empty() {
            println!("Type a name or email to search.");
            return;
        }
        if self.data.is_empty() {
            println!("No users found matching \"{}\"", self.query);
            return;
        }
        for user in &self.data {
            println!("  {}  {}", user.display_name().bold(), user.email.dimmed());
            println!("  ID: {}\n", user.id);
        }
    }
}

/// Which side of the endorsement graph a list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EndorsementSide {
    /// Endorsements given
    Given,
    /// Endorsements received
    Received,
}

/// A list of endorsements
#[derive(Debug, Serialize)]
pub struct EndorsementList {
    /// Given or received
    pub side: EndorsementSide,
    /// Rows
    pub endorsements: Vec<Endorsement>,
}

impl EndorsementList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.endorsements.is_empty() {
            match self.side {
                EndorsementSide::Given => println!("No endorsements given yet."),
                EndorsementSide::Received => println!("Nobody has endorsed you yet."),
            }
            return;
        }

        let title = match self.side {
            EndorsementSide::Given => "Endorsed by me",
            EndorsementSide::Received => "Endorsing me",
        };
        println!("{title} ({}):\n", self.endorsements.len());
        for e in &self.endorsements {
            println!("  {:.2}  {}  {}", e.confidence, e.display_name().bold(), e.user_email.dimmed());
        }
    }
}

/// One interaction as listed for a viewer
#[derive(Debug, Serialize)]
pub struct InteractionRow {
    /// Interaction ID
    pub id: String,
    /// "Sent" or "Received"
    pub direction: String,
    /// The other party
    pub counterpart_id: String,
    /// Status
    pub status: InteractionStatus,
    /// When it was sent (RFC3339)
    pub created_at: String,
    /// Whether the viewer may accept/deny
    pub can_respond: bool,
    /// Whether the viewer may rate
    pub can_rate: bool,
}

impl From<&InteractionView<'_>> for InteractionRow {
    fn from(view: &InteractionView<'_>) -> Self {
        Self {
            id: view.interaction.id.clone(),
            direction: view.direction.to_string(),
            counterpart_id: view.counterpart_id.to_string(),
            status: view.interaction.status,
            created_at: view.interaction.created_at.to_rfc3339(),
            can_respond: view.eligibility.can_respond(),
            can_rate: view.eligibility.can_rate(),
        }
    }
}

/// Interactions of the viewer
#[derive(Debug, Serialize)]
pub struct InteractionList {
    /// Rows
    pub interactions: Vec<InteractionRow>,
}

impl InteractionList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.interactions.is_empty() {
            println!("No interactions yet.");
            println!("Send your first request with: repulink interact <user-id>");
            return;
        }

        println!("{:<10} {:<10} {:<10} {:<12} ID", "Type", "User", "Status", "Date");
        for row in &self.interactions {
            let short: String = row.counterpart_id.chars().take(8).collect();
            let date = row.created_at.get(..10).unwrap_or(&row.created_at);
            println!(
                "{:<10} {:<10} {} {:<12} {}",
                row.direction,
                short,
                status_badge(row.status, 9),
                date,
                row.id
            );
        }
    }
}

/// Full view of one interaction
#[derive(Debug, Serialize)]
pub struct InteractionDetail {
    /// Summary row
    #[serde(flatten)]
    pub row: InteractionRow,
    /// Initiator's note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Submitted ratings (accepted interactions only)
    pub ratings: Vec<Rating>,
}

impl InteractionDetail {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Interaction {}", self.row.id);
        println!(
            "  {} {} ({})",
            self.row.direction,
            self.row.counterpart_id,
            status_badge(self.row.status, 0)
        );
        println!("  Sent: {}", self.row.created_at);
        if let Some(message) = &self.message {
            println!("\nMessage:\n  {message}");
        }

        if self.row.can_respond {
            println!("\nAwaiting your response:");
            println!("  repulink respond {} --accept", self.row.id);
            println!("  repulink respond {} --deny", self.row.id);
        }
        if self.row.can_rate {
            println!("\nRate this interaction:");
            println!("  repulink rate {} <-5..5> -c \"comment\"", self.row.id);
        }
        if !self.ratings.is_empty() {
            println!();
            RatingList::print_rows(&self.ratings);
        }
    }
}

/// Ratings of one interaction
#[derive(Debug, Serialize)]
pub struct RatingList {
    /// Interaction ID
    pub interaction_id: String,
    /// Rows
    pub ratings: Vec<Rating>,
}

impl RatingList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.ratings.is_empty() {
                    println!("No ratings yet.");
                } else {
                    Self::print_rows(&self.ratings);
                }
            },
            OutputMode::Json => print_json(self),
        }
    }

    fn print_rows(ratings: &[Rating]) {
        println!("Ratings ({}):", ratings.len());
        for r in ratings {
            let score = r.signed_score();
            let score = if r.rating < 0 { score.red() } else { score.yellow() };
            println!("  {score}  {} - {}", r.rater_name(), r.created_at.format("%Y-%m-%d %H:%M"));
            if let Some(comment) = &r.comment {
                println!("        {comment}");
            }
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Affected record, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl OperationResult {
    /// Successful result carrying `data`
    #[must_use]
    pub fn ok(message: impl Into<String>, data: Option<serde_json::Value>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
