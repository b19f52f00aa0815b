//! Session context and the login flow
//!
//! [`Session`] is the explicit credential handed to every authenticated call.
//! [`LoginFlow`] is the login form's state machine:
//!
//! ```text
//! anonymous --submit(non-empty)--> submitting --ok--> authenticated
//!     ^                                |
//!     +------------ error message -----+
//! ```
//!
//! Entering the flow with a valid persisted token goes straight to
//! `authenticated` without a request.

use std::fmt;

use chrono::Utc;
use log::debug;

use crate::client::AuthApi;
use crate::client::models::Credentials;
use crate::config::SessionToken;

/// Bearer credential for authenticated requests
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl From<&SessionToken> for Session {
    fn from(persisted: &SessionToken) -> Self {
        Session::new(persisted.token.clone())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("token", &"<redacted>").finish()
    }
}

/// Login form state
#[derive(Debug, Clone, PartialEq)]
pub enum LoginState {
    /// No token; `error` holds the last failure message, if any
    Anonymous { error: Option<String> },
    /// Credentials sent, waiting for the server
    Submitting,
    /// Token obtained (or already present)
    Authenticated(SessionToken),
}

/// What the caller should do after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum LoginStep {
    /// Leave the form; `fresh` is false when an existing token short-circuited
    Redirect { token: SessionToken, fresh: bool },
    /// Stay on the form and show the message
    ShowError(String),
    /// Submit ignored (empty field or request already in flight)
    Ignored,
}

/// Login state machine
#[derive(Debug, Clone)]
pub struct LoginFlow {
    state: LoginState,
}

impl LoginFlow {
    /// Enter the login view with whatever token is currently persisted.
    pub fn enter(existing: Option<&SessionToken>) -> Self {
        let state = match existing {
            Some(token) if !token.is_expired_at(Utc::now()) => {
                LoginState::Authenticated(token.clone())
            }
            _ => LoginState::Anonymous { error: None },
        };
        Self { state }
    }

    #[cfg(test)]
    pub fn state(&self) -> &LoginState {
        &self.state
    }

    /// Redirect target if the flow was entered with a valid token.
    pub fn short_circuit(&self) -> Option<LoginStep> {
        match &self.state {
            LoginState::Authenticated(token) => Some(LoginStep::Redirect {
                token: token.clone(),
                fresh: false,
            }),
            _ => None,
        }
    }

    /// `anonymous → submitting`. Returns `false` if the transition is refused.
    pub fn begin(&mut self, credentials: &Credentials) -> bool {
        if !matches!(self.state, LoginState::Anonymous { .. }) || !credentials.is_complete() {
            return false;
        }
        self.state = LoginState::Submitting;
        true
    }

    /// Apply the server's answer to a submitting flow.
    pub fn finish(&mut self, outcome: crate::error::Result<String>) -> LoginStep {
        if self.state != LoginState::Submitting {
            return LoginStep::Ignored;
        }

        match outcome {
            Ok(raw) => {
                let token = SessionToken::issue(raw, Utc::now());
                self.state = LoginState::Authenticated(token.clone());
                LoginStep::Redirect { token, fresh: true }
            }
            Err(err) => {
                let message = err.to_string();
                self.state = LoginState::Anonymous {
                    error: Some(message.clone()),
                };
                LoginStep::ShowError(message)
            }
        }
    }

    /// Submit the form: `begin`, call the API, `finish`.
    pub async fn submit<C: AuthApi + ?Sized>(
        &mut self,
        client: &C,
        credentials: &Credentials,
    ) -> LoginStep {
        if let Some(step) = self.short_circuit() {
            return step;
        }
        if !self.begin(credentials) {
            debug!("Login submit ignored");
            return LoginStep::Ignored;
        }
        let outcome = client.login(credentials).await;
        self.finish(outcome)
    }
}
