//! Display model implementations for table and pretty output

mod job;
mod profile;

pub use job::{JobDisplay, job_card};
pub use profile::{ProfileDisplay, profile_card};
