use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One ranked transcript snippet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub event_id: String,
    pub text: String,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_meeting_date")]
    pub meeting_date: NaiveDate,
    pub meeting_title: String,
    pub speaker: String,
    pub relevance_score: f64,
    pub start_time: String,
    pub end_time: String,
}

/// Backend response for a single search
///
/// `results` keeps the backend's ranking order. `total_results` is the number of
/// matches reported by the backend and may differ from `results.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub total_results: usize,
    pub processing_time: f64,
    pub summary: String,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
