//! Global CLI options shared across all commands
//!
//! # Precedence
//!
//! CLI flag > environment variable > config file > default. This struct
//! captures the CLI/env layer; the `resolve_*` methods fold in the config.

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;

/// Global CLI options passed to all command handlers.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format override
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.jobby/config.yaml)
    pub config: Option<String>,

    /// Custom API host
    pub api_host: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_host: cli.api_host.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Output format after folding in the config preference
    pub fn resolve_format(&self, config: &Config) -> OutputFormat {
        self.format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_config)
            })
            .unwrap_or_default()
    }

    /// API host after folding in the config file
    pub fn resolve_api_host(&self, config: &Config) -> Option<String> {
        self.api_host.clone().or_else(|| config.api_host.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preferences;

    #[test]
    fn test_flag_beats_config() {
        let opts = GlobalOptions {
            format: Some(OutputFormat::Json),
            config: None,
            api_host: Some("http://flag".to_string()),
        };
        let config = Config {
            api_host: Some("http://config".to_string()),
            session: None,
            preferences: Preferences {
                format: Some("table".to_string()),
            },
        };

        assert_eq!(opts.resolve_format(&config), OutputFormat::Json);
        assert_eq!(opts.resolve_api_host(&config).as_deref(), Some("http://flag"));
    }

    #[test]
    fn test_config_fills_gaps() {
        let opts = GlobalOptions::default();
        let config = Config {
            api_host: Some("http://config".to_string()),
            session: None,
            preferences: Preferences {
                format: Some("table".to_string()),
            },
        };

        assert_eq!(opts.resolve_format(&config), OutputFormat::Table);
        assert_eq!(opts.resolve_api_host(&config).as_deref(), Some("http://config"));
    }

    #[test]
    fn test_defaults() {
        let opts = GlobalOptions::default();
        let config = Config::default();

        assert_eq!(opts.resolve_format(&config), OutputFormat::Pretty);
        assert_eq!(opts.resolve_api_host(&config), None);
        assert_eq!(opts.config_ref(), None);
    }
}
