//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Credential exchange
//! - [`JobsApi`] - Filtered job listing
//! - [`ProfileApi`] - Current user's profile

mod auth;
mod jobs;
mod profile;

pub use auth::AuthApi;
pub use jobs::JobsApi;
pub use profile::ProfileApi;
