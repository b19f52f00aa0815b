//! Job listing models

use serde::{Deserialize, Serialize};

/// `GET /jobs` response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<RawJob>,
}

/// A job exactly as the API sends it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawJob {
    pub title: String,
    pub company_logo_url: String,
    pub employment_type: String,
    pub job_description: String,
    pub id: String,
    pub location: String,
    pub package_per_annum: String,
    pub rating: f64,
}

/// Normalized job record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company_logo_url: String,
    pub employment_type: String,
    pub job_description: String,
    pub location: String,
    pub package_per_annum: String,
    pub rating: f64,
}

impl From<RawJob> for Job {
    fn from(raw: RawJob) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            company_logo_url: raw.company_logo_url,
            employment_type: raw.employment_type,
            job_description: raw.job_description,
            location: raw.location,
            package_per_annum: raw.package_per_annum,
            rating: raw.rating,
        }
    }
}

impl From<&Job> for RawJob {
    fn from(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company_logo_url: job.company_logo_url.clone(),
            employment_type: job.employment_type.clone(),
            job_description: job.job_description.clone(),
            id: job.id.clone(),
            location: job.location.clone(),
            package_per_annum: job.package_per_annum.clone(),
            rating: job.rating,
        }
    }
}

impl JobsResponse {
    /// Normalize every job in the response, preserving order.
    pub fn into_jobs(self) -> Vec<Job> {
        self.jobs.into_iter().map(Job::from).collect()
    }
}
