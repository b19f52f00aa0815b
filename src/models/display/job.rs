//! Job display model

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Job;
use crate::output::formatters::{format_rating, truncate_string};

/// Width the description is cut to in cards
const DESCRIPTION_WIDTH: usize = 160;

/// Job display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct JobDisplay {
    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "TYPE")]
    pub employment_type: String,

    #[tabled(rename = "LOCATION")]
    pub location: String,

    #[tabled(rename = "PACKAGE")]
    pub package: String,

    #[tabled(rename = "RATING")]
    pub rating: String,

    #[tabled(rename = "JOB ID")]
    pub id: String,
}

impl From<&Job> for JobDisplay {
    fn from(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            employment_type: job.employment_type.clone(),
            location: job.location.clone(),
            package: job.package_per_annum.clone(),
            rating: format_rating(job.rating),
            id: job.id.clone(),
        }
    }
}

/// Render one job as a multi-line card.
pub fn job_card(job: &Job) -> String {
    let mut lines = Vec::with_capacity(5);
    lines.push(format!(
        "{}  {}",
        job.title.bold(),
        format_rating(job.rating).yellow()
    ));
    lines.push(format!(
        "  {}  ·  {}  ·  {}",
        job.location,
        job.employment_type,
        job.package_per_annum.green()
    ));
    if !job.job_description.is_empty() {
        lines.push(format!(
            "  {}",
            truncate_string(&job.job_description, DESCRIPTION_WIDTH)
        ));
    }
    lines.push(format!("  {}", job.id.dimmed()));
    lines.join("\n")
}
