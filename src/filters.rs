//! Filter and search state for the jobs view
//!
//! [`JobFilters`] owns the three independent constraints (employment types,
//! salary range, search text). Every mutation that changes what should be on
//! screen hands back a [`Refetch`] intent; the caller feeds that to the fetch
//! adapter. Nothing here performs I/O.

use std::fmt;
use std::str::FromStr;

use crate::client::JobQuery;

/// Employment type filter options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Freelance,
    Internship,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Freelance,
        EmploymentType::Internship,
    ];

    /// Identifier sent to the API
    pub fn id(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "FULLTIME",
            EmploymentType::PartTime => "PARTTIME",
            EmploymentType::Freelance => "FREELANCE",
            EmploymentType::Internship => "INTERNSHIP",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full Time",
            EmploymentType::PartTime => "Part Time",
            EmploymentType::Freelance => "Freelance",
            EmploymentType::Internship => "Internship",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EmploymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_uppercase();

        EmploymentType::ALL
            .into_iter()
            .find(|t| t.id() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown employment type '{}' (expected one of: FULLTIME, PARTTIME, FREELANCE, INTERNSHIP)",
                    s
                )
            })
    }
}

/// Minimum package tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalaryRange {
    Lpa10,
    Lpa20,
    Lpa30,
    Lpa40,
}

impl SalaryRange {
    pub const ALL: [SalaryRange; 4] = [
        SalaryRange::Lpa10,
        SalaryRange::Lpa20,
        SalaryRange::Lpa30,
        SalaryRange::Lpa40,
    ];

    /// Identifier sent to the API as `minimum_package`
    pub fn id(self) -> &'static str {
        match self {
            SalaryRange::Lpa10 => "1000000",
            SalaryRange::Lpa20 => "2000000",
            SalaryRange::Lpa30 => "3000000",
            SalaryRange::Lpa40 => "4000000",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SalaryRange::Lpa10 => "10 LPA and above",
            SalaryRange::Lpa20 => "20 LPA and above",
            SalaryRange::Lpa30 => "30 LPA and above",
            SalaryRange::Lpa40 => "40 LPA and above",
        }
    }
}

impl fmt::Display for SalaryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SalaryRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SalaryRange::ALL
            .into_iter()
            .find(|r| r.id() == trimmed)
            .ok_or_else(|| {
                format!(
                    "unknown salary range '{}' (expected one of: 1000000, 2000000, 3000000, 4000000)",
                    s
                )
            })
    }
}

/// Request to re-run the job query with the given constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refetch {
    pub query: JobQuery,
}

/// Filter state owned by the jobs view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilters {
    employment_types: Vec<EmploymentType>,
    salary_range: Option<SalaryRange>,
    search: String,
}

impl JobFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employment_types(&self) -> &[EmploymentType] {
        &self.employment_types
    }

    pub fn salary_range(&self) -> Option<SalaryRange> {
        self.salary_range
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Replace the search text. Fetching waits for [`JobFilters::submit_search`].
    pub fn set_search_text(&mut self, value: impl Into<String>) {
        self.search = value.into();
    }

    /// Submit the current search text.
    pub fn submit_search(&self) -> Refetch {
        self.refetch()
    }

    /// Select or deselect an employment type.
    ///
    /// Returns `None` when the selection already matched.
    pub fn toggle_employment_type(
        &mut self,
        employment_type: EmploymentType,
        selected: bool,
    ) -> Option<Refetch> {
        let present = self.employment_types.contains(&employment_type);
        match (selected, present) {
            (true, false) => self.employment_types.push(employment_type),
            (false, true) => self.employment_types.retain(|t| *t != employment_type),
            _ => return None,
        }
        Some(self.refetch())
    }

    /// Make `selection` the full set of selected employment types.
    ///
    /// Applied as individual toggles, but yields at most one intent.
    pub fn set_employment_types(&mut self, selection: &[EmploymentType]) -> Option<Refetch> {
        let mut changed = false;
        for t in EmploymentType::ALL {
            if !selection.contains(&t) {
                changed |= self.toggle_employment_type(t, false).is_some();
            }
        }
        for t in selection {
            changed |= self.toggle_employment_type(*t, true).is_some();
        }
        changed.then(|| self.refetch())
    }

    /// Replace the selected salary range.
    pub fn set_salary_range(&mut self, range: SalaryRange) -> Option<Refetch> {
        if self.salary_range == Some(range) {
            return None;
        }
        self.salary_range = Some(range);
        Some(self.refetch())
    }

    /// Intent for the current state, used for the initial load.
    pub fn refetch(&self) -> Refetch {
        Refetch {
            query: self.to_query(),
        }
    }

    pub fn to_query(&self) -> JobQuery {
        JobQuery {
            employment_types: self
                .employment_types
                .iter()
                .map(|t| t.id().to_string())
                .collect(),
            minimum_package: self.salary_range.map(|r| r.id().to_string()),
            search: self.search.clone(),
        }
    }
}
