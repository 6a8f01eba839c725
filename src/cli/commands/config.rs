//! Config command - show and edit ~/.repulink/config.toml

use repulink::ClientConfig;
use repulink::output::{OperationResult, OutputMode};

use crate::cli::app::ConfigAction;

/// Show or change configuration
pub fn config(action: ConfigAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let mut effective = ClientConfig::load();
            if effective.token.is_some() {
                effective.token = Some("<set>".to_string());
            }
            match mode {
                OutputMode::Json => println!("{}", serde_json::to_string_pretty(&effective)?),
                OutputMode::Human => {
                    println!("Config file: {}", ClientConfig::config_path().display());
                    print!("{}", toml::to_string_pretty(&effective)?);
                },
            }
            Ok(())
        },
        ConfigAction::SetUrl { url } => update(mode, "API URL saved", |c| c.api_url = url),
        ConfigAction::SetToken { token } => update(mode, "Token saved", |c| c.token = Some(token)),
        ConfigAction::SetUser { user_id } => {
            update(mode, "User ID saved", |c| c.user_id = Some(user_id))
        },
    }
}

fn update(mode: OutputMode, message: &str, apply: impl FnOnce(&mut ClientConfig)) -> anyhow::Result<()> {
    let path = ClientConfig::config_path();
    let mut config = ClientConfig::load_from(&path);
    apply(&mut config);
    config.save_to(&path)?;

    OperationResult::ok(format!("{message} to {}", path.display()), None).render(mode);
    Ok(())
}
