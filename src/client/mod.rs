//! Client for the transcript search endpoint.
//!
//! [`SearchBackend`] is the seam between the page controller and the network:
//! the application uses [`HttpSearchBackend`], tests substitute in-memory fakes.

pub mod error;
#[cfg(test)]
pub(crate) mod fake;
pub mod http;

pub use error::{GENERIC_ERROR_MESSAGE, SearchError};
pub use http::HttpSearchBackend;

use crate::models::{SearchRequest, SearchResponse};

/// Anything that can answer a search request
///
/// Implementations block until the request completes; the page controller calls
/// them from a worker thread.
pub trait SearchBackend: Send + Sync {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError>;
}
