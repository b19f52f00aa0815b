//! Configuration management for Jobby
//!
//! The config file stands in for the browser cookie jar: it holds the one
//! persisted session token, plus an optional API host and output preferences.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Days a freshly issued session token stays valid
pub const SESSION_TTL_DAYS: i64 = 30;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Custom API host (defaults to the public Jobby API)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Persisted session token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionToken>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// Session token with a fixed expiry window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionToken {
    /// Opaque token returned by the login endpoint
    pub token: String,

    /// Token expiration time
    pub expires_at: DateTime<Utc>,

    /// Path scope the token applies to
    #[serde(default = "default_scope")]
    pub path: String,
}

fn default_scope() -> String {
    "/".to_string()
}

impl SessionToken {
    /// Issue a token that expires `SESSION_TTL_DAYS` after `now`.
    pub fn issue(token: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at: now + Duration::days(SESSION_TTL_DAYS),
            path: default_scope(),
        }
    }

    /// Whether the token has expired as of `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".jobby").join("config.yaml"))
    }

    /// Resolve an optional override into a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, treating a missing file as an empty config
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration, honoring an optional path override
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Token lives in here; keep it private
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// The persisted token, if present and not yet expired
    pub fn valid_session(&self) -> Option<&SessionToken> {
        self.session
            .as_ref()
            .filter(|s| !s.is_expired_at(Utc::now()))
    }

    /// Like [`Config::valid_session`], but explains why there is none
    pub fn require_session(&self) -> Result<&SessionToken> {
        match &self.session {
            None => Err(ConfigError::NotLoggedIn.into()),
            Some(s) if s.is_expired_at(Utc::now()) => Err(ConfigError::SessionExpired.into()),
            Some(s) => Ok(s),
        }
    }
}
