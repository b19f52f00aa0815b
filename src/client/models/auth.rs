//! Authentication models

use serde::{Deserialize, Serialize};

/// Login form contents, sent as the `POST /login` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields filled in. The only client-side check the login form makes.
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// Body of a `POST /login` response.
///
/// Success carries `jwt_token`; failure carries `error_msg`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub jwt_token: Option<String>,

    #[serde(default)]
    pub error_msg: Option<String>,
}
