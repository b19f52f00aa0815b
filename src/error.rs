//! Error types for the Jobby CLI

use thiserror::Error;

/// Result type alias for Jobby operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Login failed: {0}")]
    LoginFailed(String),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl Error {
    /// Failure classification, if this error came from the remote API.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Error::Api(api) => Some(api.kind()),
            _ => None,
        }
    }
}

/// Coarse classification of a failed remote call.
///
/// Views render every `NetworkOrServer` failure the same way (a retry
/// affordance); `Validation` only comes out of the login endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Transport error or any non-success response
    NetworkOrServer,
    /// Credentials rejected by the server
    Validation,
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Session rejected by the server. Run `jobby login` to sign in again.")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// Login refused; carries the server-provided message verbatim
    #[error("{0}")]
    LoginRejected(String),
}

impl ApiError {
    /// Classify this error for rendering.
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::LoginRejected(_) => FailureKind::Validation,
            _ => FailureKind::NetworkOrServer,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Not logged in. Run `jobby login` to sign in.")]
    NotLoggedIn,

    #[error("Session expired. Run `jobby login` to sign in again.")]
    SessionExpired,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
