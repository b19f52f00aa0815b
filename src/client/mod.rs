//! Jobby API client

pub mod api;
pub mod jobby;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod query;

pub use api::{AuthApi, JobsApi, ProfileApi};
pub use jobby::JobbyClient;
#[cfg(test)]
pub use mock::MockJobbyClient;
pub use query::JobQuery;
