use thiserror::Error;

/// The only message users see when a search fails, whatever the cause
pub const GENERIC_ERROR_MESSAGE: &str =
    "An error occurred while fetching search results. Please try again.";

/// Maximum bytes of an error response body kept for diagnostics
const MAX_ERROR_BODY_LEN: usize = 512;

/// Failure of a single search request
///
/// Every variant is presented to the user as [`GENERIC_ERROR_MESSAGE`]; the
/// variant and its detail only go to the log.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("search endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed search response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to start search worker: {0}")]
    Worker(#[from] std::io::Error),
    #[error("search worker panicked: {0}")]
    Panicked(String),
}

impl SearchError {
    pub fn status(status: u16, body: &str) -> Self {
        SearchError::Status { status, body: truncate_body(body) }
    }

    pub fn user_message(&self) -> &'static str {
        GENERIC_ERROR_MESSAGE
    }
}

fn truncate_body(body: &str) -> String {
    let body = body.trim();
    if body.len() <= MAX_ERROR_BODY_LEN {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &body[..end])
}
