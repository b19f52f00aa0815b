//! Login and logout commands

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::context::is_interactive;
use crate::client::JobbyClient;
use crate::client::models::Credentials;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::views;
use crate::session::{LoginFlow, LoginStep};

/// Run the login command.
///
/// Interactive runs re-prompt after a failure; otherwise the first failure
/// is returned as an error.
pub async fn run(
    opts: &GlobalOptions,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let mut config = Config::load_at(opts.config_ref())?;
    let mut flow = LoginFlow::enter(config.session.as_ref());

    if flow.short_circuit().is_some() {
        println!("{} Already logged in.", "✓".green());
        print_next_steps();
        return Ok(());
    }

    let client = JobbyClient::with_host(opts.resolve_api_host(&config))?;
    let interactive = is_interactive();

    let mut username = username;
    let mut password = password;
    let mut last_username = String::new();

    loop {
        let credentials = collect_credentials(
            username.take(),
            password.take(),
            &last_username,
            interactive,
        )?;
        last_username = credentials.username.clone();

        let spinner = views::loading("Signing in...");
        let step = flow.submit(&client, &credentials).await;
        spinner.finish_and_clear();

        match step {
            LoginStep::Redirect { token, .. } => {
                config.session = Some(token);
                config.save_at(opts.config_ref())?;
                debug!("Session saved");

                println!("{} Logged in as {}", "✓".green(), credentials.username.bold());
                print_next_steps();
                return Ok(());
            }
            LoginStep::ShowError(message) => {
                if !interactive {
                    return Err(Error::LoginFailed(message));
                }
                eprintln!("{}", views::login_error(&message));
            }
            LoginStep::Ignored => {
                let message = "Username and password are required".to_string();
                if !interactive {
                    return Err(Error::LoginFailed(message));
                }
                eprintln!("{}", views::login_error(&message));
            }
        }
    }
}

/// Run the logout command
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let mut config = Config::load_at(opts.config_ref())?;

    if config.session.take().is_none() {
        println!("Not logged in.");
        return Ok(());
    }

    config.save_at(opts.config_ref())?;
    println!("{} Logged out.", "✓".green());
    Ok(())
}

/// Fill in whatever the flags left out, prompting when possible.
fn collect_credentials(
    username: Option<String>,
    password: Option<String>,
    last_username: &str,
    interactive: bool,
) -> Result<Credentials> {
    let theme = ColorfulTheme::default();

    let username = match username {
        Some(u) => u,
        None if interactive => Input::<String>::with_theme(&theme)
            .with_prompt("Username")
            .with_initial_text(last_username)
            .allow_empty(true)
            .interact_text()?,
        None => String::new(),
    };

    let password = match password {
        Some(p) => p,
        None if interactive => Password::with_theme(&theme)
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?,
        None => String::new(),
    };

    Ok(Credentials::new(username, password))
}

fn print_next_steps() {
    println!("\n{}", "Try running:".bold());
    println!("  {} - Browse jobs interactively", "jobby jobs browse".cyan());
    println!("  {} - Show your profile", "jobby profile".cyan());
}
