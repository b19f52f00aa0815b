//! Profile API trait

use async_trait::async_trait;

use crate::client::models::Profile;
use crate::error::Result;
use crate::session::Session;

/// Profile operations for the Jobby API
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Fetch the profile of the session's user
    async fn get_profile(&self, session: &Session) -> Result<Profile>;
}
