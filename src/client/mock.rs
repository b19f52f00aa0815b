//! Mock Jobby API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, JobsApi, ProfileApi};
use super::models::{Credentials, Job, Profile};
use super::query::JobQuery;
use crate::error::{ApiError, Result};
use crate::session::Session;

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockJobbyClient::new().with_jobs(vec![job]);
/// let jobs = mock.list_jobs(&session, &JobQuery::default()).await?;
/// ```
#[derive(Default)]
pub struct MockJobbyClient {
    /// Token to return from login
    token: Arc<Mutex<Option<String>>>,
    /// Jobs to return from list_jobs
    jobs: Arc<Mutex<Vec<Job>>>,
    /// Profile to return from get_profile
    profile: Arc<Mutex<Option<Profile>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub list_jobs: usize,
    pub get_profile: usize,
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    /// The API method called (e.g., "login", "list_jobs")
    pub method: String,
    /// Username for login calls
    pub username: Option<String>,
    /// Bearer token for authenticated calls
    pub token: Option<String>,
    /// Query for list_jobs calls
    pub query: Option<JobQuery>,
}

impl MockJobbyClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token returned by login
    pub fn with_token(self, token: &str) -> Self {
        *self.token.try_lock().unwrap() = Some(token.to_string());
        self
    }

    /// Set the jobs returned by list_jobs
    pub fn with_jobs(self, jobs: Vec<Job>) -> Self {
        *self.jobs.try_lock().unwrap() = jobs;
        self
    }

    /// Set the profile returned by get_profile
    pub fn with_profile(self, profile: Profile) -> Self {
        *self.profile.try_lock().unwrap() = Some(profile);
        self
    }

    /// Fail the next call with `error`
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().unwrap() = Some(error);
        self
    }

    /// Fail the next call with `error` (for use after construction)
    pub async fn fail_next(&self, error: ApiError) {
        *self.error.lock().await = Some(error);
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    async fn take_error(&self) -> Result<()> {
        match self.error.lock().await.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    async fn capture(&self, request: CapturedRequest) {
        self.captured_requests.lock().await.push(request);
    }
}

#[async_trait]
impl AuthApi for MockJobbyClient {
    async fn login(&self, credentials: &Credentials) -> Result<String> {
        self.call_count.lock().await.login += 1;
        self.capture(CapturedRequest {
            method: "login".to_string(),
            username: Some(credentials.username.clone()),
            token: None,
            query: None,
        })
        .await;
        self.take_error().await?;

        self.token
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::LoginRejected("invalid username".to_string()).into())
    }
}

#[async_trait]
impl JobsApi for MockJobbyClient {
    async fn list_jobs(&self, session: &Session, query: &JobQuery) -> Result<Vec<Job>> {
        self.call_count.lock().await.list_jobs += 1;
        self.capture(CapturedRequest {
            method: "list_jobs".to_string(),
            username: None,
            token: Some(session.token().to_string()),
            query: Some(query.clone()),
        })
        .await;
        self.take_error().await?;

        Ok(self.jobs.lock().await.clone())
    }
}

#[async_trait]
impl ProfileApi for MockJobbyClient {
    async fn get_profile(&self, session: &Session) -> Result<Profile> {
        self.call_count.lock().await.get_profile += 1;
        self.capture(CapturedRequest {
            method: "get_profile".to_string(),
            username: None,
            token: Some(session.token().to_string()),
            query: None,
        })
        .await;
        self.take_error().await?;

        self.profile
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::NotFound("/profile".to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_error_consumed_on_first_use() {
        let mock = MockJobbyClient::new().with_error(ApiError::Unauthorized);
        let session = Session::new("t");

        assert!(mock.list_jobs(&session, &JobQuery::default()).await.is_err());
        assert!(mock.list_jobs(&session, &JobQuery::default()).await.is_ok());
        assert_eq!(mock.call_counts().await.list_jobs, 2);
    }

    #[tokio::test]
    async fn test_captures_token_and_query() {
        let mock = MockJobbyClient::new();
        let query = JobQuery {
            search: "rust".to_string(),
            ..Default::default()
        };

        mock.list_jobs(&Session::new("abc"), &query).await.unwrap();

        let captured = mock.captured_requests().await;
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].token.as_deref(), Some("abc"));
        assert_eq!(captured[0].query.as_ref(), Some(&query));
    }
}
