//! Fetch adapter shared by the jobs and profile views
//!
//! A [`FetchAdapter`] tracks one remote resource: the last request issued,
//! the request generation, and the classified outcome. Each dispatch bumps the
//! generation; a response carrying an older generation is dropped so a slow,
//! superseded request can never overwrite newer state.

use std::future::Future;

use log::debug;

use crate::client::models::{Job, Profile};
use crate::error::{FailureKind, Result};

/// Outcome of the most recent request
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus<T> {
    Loading,
    Loaded(T),
    Failed { kind: FailureKind, detail: String },
}

/// A dispatched request, tagged with its generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<R> {
    pub generation: u64,
    pub request: R,
}

/// Fetched data that can be "successfully empty"
pub trait Payload {
    fn is_empty(&self) -> bool {
        false
    }
}

impl Payload for Vec<Job> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl Payload for Profile {}

/// What a view should render right now
#[derive(Debug, PartialEq)]
pub enum View<'a, T> {
    /// Nothing dispatched yet
    Idle,
    Loading,
    /// Request succeeded with no data
    Empty,
    Ready(&'a T),
    Failure { kind: FailureKind, detail: &'a str },
}

/// Request/response bookkeeping for one remote resource
#[derive(Debug)]
pub struct FetchAdapter<R, T> {
    generation: u64,
    last_request: Option<R>,
    status: Option<FetchStatus<T>>,
}

impl<R, T> Default for FetchAdapter<R, T> {
    fn default() -> Self {
        Self {
            generation: 0,
            last_request: None,
            status: None,
        }
    }
}

impl<R: Clone, T> FetchAdapter<R, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding any in flight.
    pub fn dispatch(&mut self, request: R) -> Ticket<R> {
        self.generation += 1;
        self.last_request = Some(request.clone());
        self.status = Some(FetchStatus::Loading);
        Ticket {
            generation: self.generation,
            request,
        }
    }

    /// Re-issue the last request unchanged.
    pub fn retry(&mut self) -> Option<Ticket<R>> {
        let request = self.last_request.clone()?;
        Some(self.dispatch(request))
    }

    /// Record a response. Returns `false` if the ticket was superseded.
    pub fn resolve(&mut self, generation: u64, result: Result<T>) -> bool {
        if generation != self.generation {
            debug!(
                "Discarding stale response (generation {}, current {})",
                generation, self.generation
            );
            return false;
        }

        self.status = Some(match result {
            Ok(data) => FetchStatus::Loaded(data),
            Err(err) => FetchStatus::Failed {
                kind: err.failure_kind().unwrap_or(FailureKind::NetworkOrServer),
                detail: err.to_string(),
            },
        });
        true
    }

    /// Run `fetch` for a ticket and record the result.
    pub async fn execute<F, Fut>(&mut self, ticket: Ticket<R>, fetch: F) -> bool
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let result = fetch(ticket.request).await;
        self.resolve(ticket.generation, result)
    }

    pub fn status(&self) -> Option<&FetchStatus<T>> {
        self.status.as_ref()
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, Some(FetchStatus::Failed { .. }))
    }
}

impl<R, T: Payload> FetchAdapter<R, T> {
    /// Classify the current status for rendering.
    pub fn view(&self) -> View<'_, T> {
        match &self.status {
            None => View::Idle,
            Some(FetchStatus::Loading) => View::Loading,
            Some(FetchStatus::Loaded(data)) if data.is_empty() => View::Empty,
            Some(FetchStatus::Loaded(data)) => View::Ready(data),
            Some(FetchStatus::Failed { kind, detail }) => View::Failure {
                kind: *kind,
                detail: detail.as_str(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, Error};

    fn job(id: &str) -> Job {
        Job {
            id: id.to_string(),
            title: "Engineer".to_string(),
            company_logo_url: String::new(),
            employment_type: "Full Time".to_string(),
            job_description: String::new(),
            location: "Delhi".to_string(),
            package_per_annum: "10 LPA".to_string(),
            rating: 4.0,
        }
    }

    #[test]
    fn test_new_adapter_is_idle() {
        let mut adapter: FetchAdapter<String, Vec<Job>> = FetchAdapter::new();
        assert_eq!(adapter.view(), View::Idle);
        assert!(adapter.retry().is_none());
    }

    #[test]
    fn test_dispatch_shows_loading() {
        let mut adapter: FetchAdapter<String, Vec<Job>> = FetchAdapter::new();
        let ticket = adapter.dispatch("q".to_string());

        assert_eq!(ticket.generation, 1);
        assert_eq!(adapter.view(), View::Loading);
    }

    #[test]
    fn test_empty_success_is_not_failure_or_loading() {
        let mut adapter: FetchAdapter<String, Vec<Job>> = FetchAdapter::new();
        let ticket = adapter.dispatch("q".to_string());
        assert!(adapter.resolve(ticket.generation, Ok(Vec::new())));

        assert_eq!(adapter.view(), View::Empty);
        assert!(!adapter.is_failed());
    }

    #[test]
    fn test_success_with_data() {
        let mut adapter: FetchAdapter<String, Vec<Job>> = FetchAdapter::new();
        let ticket = adapter.dispatch("q".to_string());
        adapter.resolve(ticket.generation, Ok(vec![job("1")]));

        match adapter.view() {
            View::Ready(jobs) => assert_eq!(jobs[0].id, "1"),
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_is_classified() {
        let mut adapter: FetchAdapter<String, Profile> = FetchAdapter::new();
        let ticket = adapter.dispatch("/profile".to_string());
        adapter.resolve(
            ticket.generation,
            Err(ApiError::ServerError("down".to_string()).into()),
        );

        assert!(adapter.is_failed());
        match adapter.view() {
            View::Failure { kind, detail } => {
                assert_eq!(kind, FailureKind::NetworkOrServer);
                assert!(detail.contains("down"));
            }
            other => panic!("expected Failure, got {:?}", other),
        }
    }

    #[test]
    fn test_non_api_error_counts_as_network_or_server() {
        let mut adapter: FetchAdapter<String, Profile> = FetchAdapter::new();
        let ticket = adapter.dispatch("/profile".to_string());
        adapter.resolve(ticket.generation, Err(Error::Other("io".to_string())));

        assert!(matches!(
            adapter.view(),
            View::Failure {
                kind: FailureKind::NetworkOrServer,
                ..
            }
        ));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut adapter: FetchAdapter<String, Vec<Job>> = FetchAdapter::new();
        let first = adapter.dispatch("old".to_string());
        let second = adapter.dispatch("new".to_string());

        assert!(adapter.resolve(second.generation, Ok(vec![job("new")])));
        assert!(!adapter.resolve(first.generation, Ok(vec![job("old")])));

        match adapter.view() {
            View::Ready(jobs) => assert_eq!(jobs[0].id, "new"),
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn test_retry_reissues_last_request() {
        let mut adapter: FetchAdapter<String, Vec<Job>> = FetchAdapter::new();
        assert!(adapter.retry().is_none());

        let first = adapter.dispatch("employment_type=FULLTIME".to_string());
        adapter.resolve(first.generation, Err(ApiError::Unauthorized.into()));

        let retry = adapter.retry().unwrap();
        assert_eq!(retry.request, first.request);
        assert_eq!(retry.generation, first.generation + 1);
        assert_eq!(adapter.view(), View::Loading);
    }

    #[tokio::test]
    async fn test_execute_records_result() {
        let mut adapter: FetchAdapter<String, Vec<Job>> = FetchAdapter::new();
        let ticket = adapter.dispatch("q".to_string());

        let accepted = adapter
            .execute(ticket, |request| async move { Ok(vec![job(&request)]) })
            .await;

        assert!(accepted);
        match adapter.view() {
            View::Ready(jobs) => assert_eq!(jobs[0].id, "q"),
            other => panic!("expected Ready, got {:?}", other),
        }
    }
}
