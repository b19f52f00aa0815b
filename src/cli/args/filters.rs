//! Filter argument types for job commands

use clap::Args;

use crate::filters::{EmploymentType, JobFilters, SalaryRange};

/// Job filter arguments.
///
/// Employment types accept repeated flags and comma-separated values:
/// - `--type FULLTIME --type INTERNSHIP` (repeated)
/// - `--type FULLTIME,INTERNSHIP` (comma-separated)
#[derive(Args, Debug, Default, Clone)]
pub struct JobFilterArgs {
    /// Employment types (FULLTIME, PARTTIME, FREELANCE, INTERNSHIP)
    #[arg(long = "type", short = 't', value_delimiter = ',')]
    pub employment_types: Vec<EmploymentType>,

    /// Minimum package tier (1000000, 2000000, 3000000, 4000000)
    #[arg(long, short = 's')]
    pub salary: Option<SalaryRange>,

    /// Search text matched against job titles
    #[arg(long, short = 'q')]
    pub search: Option<String>,
}

impl JobFilterArgs {
    /// Build the initial filter state from the flags
    pub fn to_filters(&self) -> JobFilters {
        let mut filters = JobFilters::new();
        for t in &self.employment_types {
            filters.toggle_employment_type(*t, true);
        }
        if let Some(range) = self.salary {
            filters.set_salary_range(range);
        }
        if let Some(ref search) = self.search {
            filters.set_search_text(search.clone());
        }
        filters
    }
}
