//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::Credentials;
use crate::error::Result;

/// Authentication operations for the Jobby API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for an opaque session token.
    ///
    /// A refusal comes back as `ApiError::LoginRejected` carrying the server's
    /// message.
    async fn login(&self, credentials: &Credentials) -> Result<String>;
}
