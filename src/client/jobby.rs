//! Jobby API client implementation

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;

use super::api::{AuthApi, JobsApi, ProfileApi};
use super::models::{Credentials, Job, JobsResponse, LoginResponse, Profile, ProfileResponse};
use super::query::JobQuery;
use crate::error::{ApiError, Result};
use crate::session::Session;

/// Jobby API base URL
pub const API_BASE_URL: &str = "https://apis.ccbp.in";

/// Jobby API client
pub struct JobbyClient {
    http: HttpClient,
    base_url: String,
}

impl JobbyClient {
    /// Create a client against a custom API host.
    ///
    /// Trailing slashes are stripped so paths can be appended directly.
    pub fn with_host(api_host: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(concat!("jobby/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base_url = api_host
            .map(|h| h.trim_end_matches('/').to_string())
            .unwrap_or_else(|| API_BASE_URL.to_string());

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make an authenticated GET request
    async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        session: &Session,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(query)
            .bearer_auth(session.token())
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        debug!("GET {} -> {}", path, status);

        match status {
            s if s.is_success() => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(path.to_string()).into()),
            s if s.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", s));
                Err(ApiError::ServerError(error_msg).into())
            }
            s => Err(ApiError::UnexpectedStatus(s.as_u16()).into()),
        }
    }
}

#[async_trait]
impl AuthApi for JobbyClient {
    async fn login(&self, credentials: &Credentials) -> Result<String> {
        let url = format!("{}/login", self.base_url);
        debug!("POST {} as {}", url, credentials.username);

        let response = self
            .http
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        debug!("POST /login -> {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        let parsed: Option<LoginResponse> = serde_json::from_str(&body).ok();

        match parsed {
            Some(LoginResponse {
                jwt_token: Some(token),
                ..
            }) if status.is_success() => Ok(token),
            Some(LoginResponse {
                error_msg: Some(msg),
                ..
            }) => Err(ApiError::LoginRejected(msg).into()),
            _ if status.is_server_error() => Err(ApiError::ServerError(body).into()),
            _ if status.is_success() => Err(ApiError::InvalidResponse(
                "Login response did not include a token".to_string(),
            )
            .into()),
            _ => Err(ApiError::UnexpectedStatus(status.as_u16()).into()),
        }
    }
}

#[async_trait]
impl JobsApi for JobbyClient {
    async fn list_jobs(&self, session: &Session, query: &JobQuery) -> Result<Vec<Job>> {
        let response: JobsResponse = self
            .get(session, "/jobs", &query.to_query_params())
            .await?;
        Ok(response.into_jobs())
    }
}

#[async_trait]
impl ProfileApi for JobbyClient {
    async fn get_profile(&self, session: &Session) -> Result<Profile> {
        let response: ProfileResponse = self.get(session, "/profile", &[]).await?;
        Ok(Profile::from(response))
    }
}
