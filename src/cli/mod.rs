//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod browse;
pub mod completions;
pub mod context;
pub mod handlers;
pub mod jobs;
pub mod login;
pub mod profile;
pub mod status;

pub use args::{JobFilterArgs, OutputFormat};
pub use context::CommandContext;

/// Jobby CLI - Browse job listings from your terminal
#[derive(Parser, Debug)]
#[command(name = "jobby")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "JOBBY_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "JOBBY_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API host
    #[arg(long, global = true, env = "JOBBY_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "JOBBY_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store a session token
    #[command(after_help = "EXAMPLES:\n  \
            jobby login                              # Prompt for credentials\n  \
            jobby login -u rahul                     # Prompt for password only\n  \
            JOBBY_PASSWORD=... jobby login -u rahul  # Non-interactive")]
    Login {
        /// Username
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Password
        #[arg(long, short = 'p', env = "JOBBY_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored session token
    Logout,

    /// Show session and configuration status
    Status,

    /// Show your profile card
    Profile,

    /// Search and browse job listings
    #[command(subcommand)]
    Jobs(JobsCommands),

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   jobby completion bash > /etc/bash_completion.d/jobby
  zsh:    jobby completion zsh > \"${fpath[1]}/_jobby\"
  fish:   jobby completion fish > ~/.config/fish/completions/jobby.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Job listing subcommands
#[derive(Subcommand, Debug)]
pub enum JobsCommands {
    /// List jobs matching the given filters
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            jobby jobs list                              # Everything\n  \
            jobby jobs list --type FULLTIME,INTERNSHIP   # Any of these types\n  \
            jobby jobs list --salary 2000000             # 20 LPA and above\n  \
            jobby jobs list --search devops --format json"
    )]
    List {
        #[command(flatten)]
        filters: JobFilterArgs,
    },

    /// Interactively refine filters and browse results
    Browse {
        #[command(flatten)]
        filters: JobFilterArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{EmploymentType, SalaryRange};
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_jobs_list_filters() {
        let cli = Cli::parse_from([
            "jobby",
            "jobs",
            "list",
            "--type",
            "FULLTIME,PARTTIME",
            "--type",
            "internship",
            "--salary",
            "4000000",
            "--search",
            "data",
            "--format",
            "json",
        ]);

        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Jobs(JobsCommands::List { filters }) => {
                assert_eq!(
                    filters.employment_types,
                    vec![
                        EmploymentType::FullTime,
                        EmploymentType::PartTime,
                        EmploymentType::Internship
                    ]
                );
                assert_eq!(filters.salary, Some(SalaryRange::Lpa40));
                assert_eq!(filters.search.as_deref(), Some("data"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_salary_rejected() {
        let result = Cli::try_parse_from(["jobby", "jobs", "list", "--salary", "123"]);
        assert!(result.is_err());
    }
}
