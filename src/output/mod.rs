//! Output formatting for CLI results

use crate::cli::OutputFormat;
use crate::client::models::{Job, Profile};
use crate::error::Result;
use crate::models::display::{job_card, profile_card};
use crate::models::{JobDisplay, ProfileDisplay};

pub mod formatters;
pub mod json;
pub mod table;
pub mod views;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl Formattable for [Job] {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json_list(self)?),
            OutputFormat::Table => {
                let rows: Vec<JobDisplay> = self.iter().map(JobDisplay::from).collect();
                Ok(table::format_table(&rows).unwrap_or_else(views::no_jobs))
            }
            OutputFormat::Pretty if self.is_empty() => Ok(views::no_jobs()),
            OutputFormat::Pretty => Ok(self
                .iter()
                .map(job_card)
                .collect::<Vec<_>>()
                .join("\n\n")),
        }
    }
}

impl Formattable for Profile {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Table => {
                let rows = [ProfileDisplay::from(self)];
                Ok(table::format_table(&rows).unwrap_or_default())
            }
            OutputFormat::Pretty => Ok(profile_card(self)),
        }
    }
}
