//! Progressive disclosure of search results.
//!
//! The backend returns the whole ranked page at once; the client only reveals
//! it [`PAGE_SIZE`] results at a time. The window never refetches.

use crate::models::{SearchResponse, SearchResult};

/// Results revealed initially and per "show more"
pub const PAGE_SIZE: usize = 3;

/// Shown in place of the list when a search has no matches
pub const EMPTY_RESULTS_MESSAGE: &str = "No results found. Please try a different search query.";

/// Number of results currently revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsWindow {
    display_count: usize,
}

impl ResultsWindow {
    pub fn new() -> Self {
        Self { display_count: PAGE_SIZE }
    }

    pub fn display_count(&self) -> usize {
        self.display_count
    }

    /// Back to the first page; called whenever a new response is installed
    pub fn reset(&mut self) {
        self.display_count = PAGE_SIZE;
    }

    /// Whether the "show more" control should be offered
    ///
    /// Never for an empty result set, whatever `total_results` says.
    pub fn has_more(&self, response: &SearchResponse) -> bool {
        !response.results.is_empty() && self.display_count < response.total_results
    }

    /// Reveal another page, capped at `total_results`; returns true if the
    /// window grew
    pub fn show_more(&mut self, response: &SearchResponse) -> bool {
        if !self.has_more(response) {
            return false;
        }
        self.display_count = (self.display_count + PAGE_SIZE).min(response.total_results);
        true
    }

    /// Results inside the window, in backend order
    pub fn visible<'a>(&self, response: &'a SearchResponse) -> &'a [SearchResult] {
        let end = self.display_count.min(response.results.len());
        &response.results[..end]
    }
}

impl Default for ResultsWindow {
    fn default() -> Self {
        Self::new()
    }
}
