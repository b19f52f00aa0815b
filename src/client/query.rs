//! Query construction for the job listing endpoint

/// Query constraints for `GET /jobs`.
///
/// All three constraints are always sent. An empty segment means "no
/// constraint" on the server side, so an empty employment-type list widens the
/// search rather than matching nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    /// Employment type ids, sent comma-joined
    pub employment_types: Vec<String>,
    /// Minimum package threshold id
    pub minimum_package: Option<String>,
    /// Substring filter
    pub search: String,
}

impl JobQuery {
    /// The `employment_type` segment: ids joined by a comma.
    pub fn employment_type_segment(&self) -> String {
        self.employment_types.join(",")
    }

    /// Convert to query string parameters.
    ///
    /// Returns (key, value) pairs in the order the API documents them.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("employment_type", self.employment_type_segment()),
            (
                "minimum_package",
                self.minimum_package.clone().unwrap_or_default(),
            ),
            ("search", self.search.clone()),
        ]
    }
}
