//! civicly - Search city council meeting transcripts from the terminal
//!
//! This library provides the pieces behind the `civicly` binary:
//!
//! - Validating the search form (query text and an optional `MM/DD/YYYY` date range)
//! - Posting searches to the transcript search endpoint and parsing its responses
//! - Tracking page state with request sequencing, so only the latest search is shown
//! - Progressively revealing results three at a time
//! - An interactive ratatui interface and a one-shot CLI command
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use civicly::{HttpSearchBackend, PageController, SearchForm};
//!
//! let mut form = SearchForm::new();
//! form.set_query("bike lanes");
//! form.set_start_date("1/1/2023");
//! let query = form.submit()?;
//!
//! let backend = HttpSearchBackend::new("http://localhost:8000/search")?;
//! let mut page = PageController::new(Arc::new(backend));
//! page.handle_search(query);
//! page.wait_for_completion();
//! if let Some(response) = &page.state().results {
//!     println!("{} results", response.total_results);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod form;
pub mod models;
pub mod parsers;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use client::{HttpSearchBackend, SearchBackend, SearchError};
pub use config::AppConfig;
pub use controller::{PageController, ResultsWindow, UiState};
pub use form::{SearchForm, validate_date, validate_range};
pub use models::{City, SearchQuery, SearchRequest, SearchResponse, SearchResult};
pub use parsers::parse_search_response;
