use serde::Serialize;

/// Number of results requested from the backend for every search
pub const RESULT_LIMIT: u32 = 10;

/// A submitted search with normalized (`MM/DD/YYYY`) dates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), start_date: None, end_date: None }
    }

    /// Builder-style date range; empty strings are treated as absent
    pub fn with_dates(mut self, start_date: &str, end_date: &str) -> Self {
        self.start_date = non_empty(start_date);
        self.end_date = non_empty(end_date);
        self
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_string()) }
}

/// Wire payload for `POST /search`
///
/// Date keys are omitted entirely when absent rather than sent as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl From<&SearchQuery> for SearchRequest {
    fn from(query: &SearchQuery) -> Self {
        Self {
            query: query.text.clone(),
            limit: RESULT_LIMIT,
            start_date: query.start_date.clone(),
            end_date: query.end_date.clone(),
        }
    }
}
