//! In-memory backends for unit tests

use std::sync::Mutex;
use std::time::Duration;

use chrono::NaiveDate;

use super::{SearchBackend, SearchError};
use crate::models::{SearchRequest, SearchResponse, SearchResult};

pub(crate) fn sample_result(idx: usize) -> SearchResult {
    SearchResult {
        event_id: format!("event-{}", idx),
        text: format!("Transcript snippet number {}", idx),
        meeting_date: NaiveDate::from_ymd_opt(2023, 4, 1 + (idx % 28) as u32).unwrap(),
        meeting_title: format!("Council Meeting {}", idx),
        speaker: "Councilmember Rivera".to_string(),
        relevance_score: 1.0 - idx as f64 / 100.0,
        start_time: "00:10:00".to_string(),
        end_time: "00:10:30".to_string(),
    }
}

pub(crate) fn sample_response(count: usize, total_results: usize) -> SearchResponse {
    SearchResponse {
        results: (0..count).map(sample_result).collect(),
        total_results,
        processing_time: 0.42,
        summary: format!("Found {} relevant moments.", count),
    }
}

/// Answers every request with a fixed outcome, optionally after a delay, and
/// records what it was asked
pub(crate) struct FakeBackend {
    response: Option<SearchResponse>,
    delay: Duration,
    requests: Mutex<Vec<SearchRequest>>,
}

impl FakeBackend {
    pub(crate) fn ok(response: SearchResponse) -> Self {
        Self { response: Some(response), delay: Duration::ZERO, requests: Mutex::new(Vec::new()) }
    }

    pub(crate) fn failing() -> Self {
        Self { response: None, delay: Duration::ZERO, requests: Mutex::new(Vec::new()) }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl SearchBackend for FakeBackend {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        self.requests.lock().unwrap().push(request.clone());
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        self.response.clone().ok_or_else(|| SearchError::status(500, "Internal Server Error"))
    }
}
