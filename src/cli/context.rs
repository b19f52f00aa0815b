//! Command execution context
//!
//! Provides a unified context for authenticated commands, eliminating
//! boilerplate for config loading, session checks, and client initialization.

use std::io::IsTerminal;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::JobbyClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::Session;

/// Context for command execution containing client, session, and format.
pub struct CommandContext {
    /// API client pointed at the resolved host
    pub client: JobbyClient,
    /// Session passed to every authenticated call
    pub session: Session,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns an error if the config cannot be loaded or no valid session is
    /// stored.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let session = Session::from(config.require_session()?);

        let api_host = opts.resolve_api_host(&config);
        let client = JobbyClient::with_host(api_host)?;
        debug!("Using API at {}", client.base_url());

        let format = opts.resolve_format(&config);

        Ok(Self {
            client,
            session,
            format,
        })
    }
}

/// Whether prompts can be shown (stdin is a terminal).
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}
