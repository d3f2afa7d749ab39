//! Page state and search orchestration.
//!
//! [`PageController`] owns everything the results page shows: whether a search
//! has been performed, the loading flag, the error banner, the last response and
//! its display window.
//!
//! # Request sequencing
//!
//! Each call to [`PageController::handle_search`] issues a new ticket and runs the
//! request on its own worker thread. Completions come back over a channel and
//! are applied on the caller's thread by [`PageController::poll`] or
//! [`PageController::wait`]. Only the completion carrying the most recently
//! issued ticket is applied; anything older is dropped, so overlapping
//! submissions can never leave the page showing a superseded search.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use super::results::ResultsWindow;
use crate::client::{SearchBackend, SearchError};
use crate::models::{SearchQuery, SearchRequest, SearchResponse};

/// Monotonically increasing request identifier
pub type Ticket = u64;

/// Outcome of one request, tagged with the ticket it was issued under
#[derive(Debug)]
pub struct Completion {
    pub ticket: Ticket,
    pub outcome: Result<SearchResponse, SearchError>,
}

/// Everything the page renders
#[derive(Debug, Default)]
pub struct UiState {
    pub search_performed: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    pub results: Option<SearchResponse>,
    pub window: ResultsWindow,
}

pub struct PageController {
    backend: Arc<dyn SearchBackend>,
    state: UiState,
    last_issued: Ticket,
    loading_since: Option<Instant>,
    sender: Sender<Completion>,
    receiver: Receiver<Completion>,
}

impl PageController {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            backend,
            state: UiState::default(),
            last_issued: 0,
            loading_since: None,
            sender,
            receiver,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Ticket of the most recently issued request (0 before the first search)
    pub fn last_issued(&self) -> Ticket {
        self.last_issued
    }

    /// Time since the current request was issued, while one is in flight
    pub fn loading_elapsed(&self) -> Option<Duration> {
        self.loading_since.filter(|_| self.state.is_loading).map(|since| since.elapsed())
    }

    /// Start a search, replacing whatever the page currently shows
    pub fn handle_search(&mut self, query: SearchQuery) -> Ticket {
        self.state.search_performed = true;
        self.state.is_loading = true;
        self.state.error = None;
        self.state.results = None;
        self.state.window.reset();

        self.last_issued += 1;
        let ticket = self.last_issued;
        self.loading_since = Some(Instant::now());

        let request = SearchRequest::from(&query);
        info!(
            ticket,
            query = %request.query,
            start_date = request.start_date.as_deref().unwrap_or(""),
            end_date = request.end_date.as_deref().unwrap_or(""),
            "issuing search"
        );

        let backend = Arc::clone(&self.backend);
        let sender = self.sender.clone();
        let spawned = thread::Builder::new().name(format!("search-{}", ticket)).spawn(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| backend.search(&request)))
                .unwrap_or_else(|payload| Err(SearchError::Panicked(panic_message(payload))));
            // Receiver is gone only when the controller was dropped
            let _ = sender.send(Completion { ticket, outcome });
        });

        if let Err(err) = spawned {
            self.apply(Completion { ticket, outcome: Err(SearchError::Worker(err)) });
        }

        ticket
    }

    /// Apply finished requests without blocking; returns true if the latest
    /// request completed
    pub fn poll(&mut self) -> bool {
        let mut applied = false;
        while let Ok(completion) = self.receiver.try_recv() {
            applied |= self.apply(completion);
        }
        applied
    }

    /// Block until the latest request completes; returns false if nothing is in
    /// flight
    ///
    /// Every worker reports exactly once, so this returns as soon as the
    /// transport finishes.
    pub fn wait_for_completion(&mut self) -> bool {
        if !self.state.is_loading {
            return false;
        }
        // The controller owns a sender, so the channel never disconnects
        while let Ok(completion) = self.receiver.recv() {
            if self.apply(completion) {
                return true;
            }
        }
        false
    }

    /// Block until the latest request completes or `timeout` elapses; returns
    /// true if it completed
    pub fn wait(&mut self, timeout: Duration) -> bool {
        if !self.state.is_loading {
            return false;
        }
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.receiver.recv_timeout(remaining) {
                Ok(completion) => {
                    if self.apply(completion) {
                        return true;
                    }
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return false;
                }
            }
        }
    }

    /// Install a completion if it belongs to the latest request; stale
    /// completions are discarded and false is returned
    pub fn apply(&mut self, completion: Completion) -> bool {
        let Completion { ticket, outcome } = completion;
        if ticket != self.last_issued {
            debug!(ticket, latest = self.last_issued, "discarding superseded search response");
            return false;
        }

        match outcome {
            Ok(response) => {
                info!(
                    ticket,
                    results = response.results.len(),
                    total_results = response.total_results,
                    "search results received"
                );
                self.state.results = Some(response);
                self.state.window.reset();
            }
            Err(err) => {
                error!(ticket, error = %err, "search request failed");
                self.state.error = Some(err.user_message().to_string());
            }
        }

        self.state.is_loading = false;
        self.loading_since = None;
        true
    }

    /// Reveal the next page of results; returns true if more became visible
    pub fn show_more(&mut self) -> bool {
        match &self.state.results {
            Some(response) => self.state.window.show_more(response),
            None => false,
        }
    }

    /// Number of results currently visible
    pub fn visible_count(&self) -> usize {
        self.state.results.as_ref().map(|r| self.state.window.visible(r).len()).unwrap_or(0)
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
