//! CLI definitions and entry point

use clap::{Parser, Subcommand};
use repulink::ClientConfig;
use repulink::core::models::{RATING_MAX, RATING_MIN};
use repulink::output::OutputMode;

use super::commands::{self, Context};

/// repulink - Reputation from endorsements, interactions and ratings
#[derive(Parser, Debug)]
#[command(
    name = "repulink",
    version,
    about = "Client for the RepuLink reputation service",
    long_about = "Search users, endorse them, send and answer interaction requests,\n\
                  and rate the interactions you took part in.\n\n\
                  Configuration lives in ~/.repulink/config.toml; REPULINK_API_URL,\n\
                  REPULINK_TOKEN and REPULINK_USER_ID override it."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Backend base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Bearer token (overrides config)
    #[arg(long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search users by name or email
    Search {
        /// Text to search for
        query: String,
    },

    /// Endorse a user (re-endorsing replaces the confidence)
    Endorse {
        /// User ID to endorse
        user_id: String,

        /// Confidence between 0 and 1
        #[arg(short, long)]
        confidence: f64,
    },

    /// List endorsements you gave (or received with --endorsers)
    Endorsements {
        /// Show who endorses you instead
        #[arg(long)]
        endorsers: bool,

        /// Look at another user's endorsements
        #[arg(long)]
        user: Option<String>,
    },

    /// Send an interaction request
    Interact {
        /// Recipient user ID
        user_id: String,

        /// Optional message
        #[arg(short, long)]
        message: Option<String>,
    },

    /// List your interactions
    Interactions {
        /// Only sent (initiator) or received (target)
        #[arg(long)]
        role: Option<String>,

        /// Rows to skip
        #[arg(long)]
        skip: Option<u32>,

        /// Maximum rows
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show one interaction with its ratings and available actions
    Show {
        /// Interaction ID
        id: String,
    },

    /// Accept or deny an interaction you received
    Respond {
        /// Interaction ID
        id: String,

        /// Accept the request
        #[arg(long, conflicts_with = "deny", required_unless_present = "deny")]
        accept: bool,

        /// Deny the request
        #[arg(long)]
        deny: bool,
    },

    /// Rate an accepted interaction
    Rate {
        /// Interaction ID
        id: String,

        /// Score from -5 to 5
        #[arg(
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i8).range(i64::from(RATING_MIN)..=i64::from(RATING_MAX))
        )]
        score: i8,

        /// Optional comment
        #[arg(short, long)]
        comment: Option<String>,
    },

    /// List ratings of an interaction
    Ratings {
        /// Interaction ID
        id: String,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Set the backend base URL
    SetUrl {
        /// URL, e.g. `https://repulink.example.com`
        url: String,
    },

    /// Store a bearer token
    SetToken {
        /// Token value
        token: String,
    },

    /// Store your user ID (skips the /users/me lookup)
    SetUser {
        /// User ID
        user_id: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let Some(command) = cli.command else {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION"),
                    "hint": "Use --help for usage"
                })
            );
        } else {
            println!("repulink v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'repulink --help' for usage");
            println!("Run 'repulink config set-token <token>' to get started");
        }
        return Ok(());
    };

    match command {
        Command::Version => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("repulink v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        Command::Config { action } => commands::config(action, output_mode),
        command => {
            let config = ClientConfig::load().with_overrides(cli.api_url, cli.token, None);
            let ctx = Context::new(&config, output_mode)?;
            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
            let result = runtime.block_on(dispatch(command, &ctx));
            if result.is_err() && ctx.error_reported() {
                std::process::exit(1);
            }
            result
        },
    }
}

async fn dispatch(command: Command, ctx: &Context) -> anyhow::Result<()> {
    match command {
        Command::Search { query } => commands::search(ctx, &query).await,
        Command::Endorse {
            user_id,
            confidence,
        } => commands::endorse(ctx, &user_id, confidence).await,
        Command::Endorsements { endorsers, user } => {
            commands::endorsements(ctx, endorsers, user.as_deref()).await
        },
        Command::Interact { user_id, message } => {
            commands::interact(ctx, &user_id, message.as_deref()).await
        },
        Command::Interactions { role, skip, limit } => {
            commands::interactions(ctx, role.as_deref(), skip, limit).await
        },
        Command::Show { id } => commands::show(ctx, &id).await,
        Command::Respond { id, accept, .. } => commands::respond(ctx, &id, accept).await,
        Command::Rate { id, score, comment } => {
            commands::rate(ctx, &id, score, comment.as_deref()).await
        },
        Command::Ratings { id } => commands::ratings(ctx, &id).await,
        Command::Config { .. } | Command::Version => Ok(()),
    }
}
