//! Status command implementation

use chrono::Utc;
use colored::Colorize;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::jobby::API_BASE_URL;
use crate::config::Config;
use crate::error::Result;
use crate::output::formatters::format_remaining;

/// Run the status command to display session and configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let config = Config::load_at(opts.config_ref())?;
    let config_path = Config::resolve_path(opts.config_ref())?;
    let api_host = opts
        .resolve_api_host(&config)
        .unwrap_or_else(|| API_BASE_URL.to_string());
    let now = Utc::now();

    if opts.resolve_format(&config) == OutputFormat::Json {
        let output = json!({
            "config_path": config_path.display().to_string(),
            "api_host": api_host,
            "logged_in": config.valid_session().is_some(),
            "expires_at": config.session.as_ref().map(|s| s.expires_at.to_rfc3339()),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}\n", "Jobby Status".bold());
    println!("Config file: {}", config_path.display().to_string().cyan());
    println!("API host:    {}", api_host.cyan());
    println!();

    match &config.session {
        None => {
            println!("{} Not logged in", "✗".red());
            println!("  → Run 'jobby login' to sign in");
        }
        Some(session) if session.is_expired_at(now) => {
            println!("{} Session expired", "⚠".yellow());
            println!("  → Run 'jobby login' to sign in again");
        }
        Some(session) => {
            println!(
                "{} Logged in (session expires in {})",
                "✓".green(),
                format_remaining(session.expires_at, now)
            );
        }
    }

    println!();
    Ok(())
}
