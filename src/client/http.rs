use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use tracing::{debug, instrument};

use super::SearchBackend;
use super::error::SearchError;
use crate::models::{SearchRequest, SearchResponse};
use crate::parsers::parse_search_response;

/// Search backend reached over HTTP with a blocking `reqwest` client
///
/// One POST per search, JSON in and JSON out. No retries: a failed request is
/// reported once and the user decides whether to resubmit.
pub struct HttpSearchBackend {
    client: Client,
    endpoint: String,
}

impl HttpSearchBackend {
    /// Build a client for `endpoint`; request timeouts are the transport's defaults
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("civicly/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, endpoint: endpoint.into() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchBackend for HttpSearchBackend {
    #[instrument(name = "search_request", skip(self, request), fields(endpoint = %self.endpoint))]
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let transport = |source| SearchError::Transport { url: self.endpoint.clone(), source };

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(request)
            .send()
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().map_err(transport)?;

        if !status.is_success() {
            return Err(SearchError::status(status.as_u16(), &body));
        }

        let parsed = parse_search_response(&body)?;
        debug!(
            results = parsed.results.len(),
            total_results = parsed.total_results,
            processing_time = parsed.processing_time,
            "search completed"
        );
        Ok(parsed)
    }
}
