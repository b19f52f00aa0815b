//! Jobby CLI - browse job listings from the terminal

use clap::Parser;
use env_logger::Env;
use log::LevelFilter;

mod cli;
mod client;
mod config;
mod error;
mod fetch;
mod filters;
mod models;
mod output;
mod session;

use cli::args::GlobalOptions;
use cli::{Cli, Commands, JobsCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if cli.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { username, password } => cli::login::run(&opts, username, password).await,
        Commands::Logout => cli::login::logout(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Profile => cli::profile::run(&opts).await,
        Commands::Jobs(jobs_cmd) => match jobs_cmd {
            JobsCommands::List { filters } => cli::jobs::list(&opts, &filters).await,
            JobsCommands::Browse { filters } => cli::browse::run(&opts, &filters).await,
        },
        Commands::Version => {
            println!("jobby version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
