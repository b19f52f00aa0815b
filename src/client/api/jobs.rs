//! Job listing API trait

use async_trait::async_trait;

use crate::client::JobQuery;
use crate::client::models::Job;
use crate::error::Result;
use crate::session::Session;

/// Job listing operations for the Jobby API
#[async_trait]
pub trait JobsApi: Send + Sync {
    /// List jobs matching every constraint in `query`
    async fn list_jobs(&self, session: &Session, query: &JobQuery) -> Result<Vec<Job>>;
}
