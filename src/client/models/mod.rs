//! Jobby API data models
//!
//! Wire types mirror the JSON the API sends; record types are the normalized
//! shapes the rest of the CLI works with. Conversion is field renaming only.

mod auth;
mod job;
mod profile;

pub use auth::{Credentials, LoginResponse};
pub use job::{Job, JobsResponse};
pub use profile::{Profile, ProfileResponse};
