//! Data models for council transcript search.
//!
//! - [`SearchQuery`] - Validated user input from the search form
//! - [`SearchRequest`] - JSON payload posted to the search endpoint
//! - [`SearchResult`] / [`SearchResponse`] - Ranked transcript snippets returned by the backend
//! - [`City`] - Public records viewer the result links point at
//!
//! Response models use serde with a lenient meeting date deserializer from the
//! `parsers::deserializers` module.

pub mod city;
pub mod query;
pub mod search;

pub use city::City;
pub use query::{RESULT_LIMIT, SearchQuery, SearchRequest};
pub use search::{SearchResponse, SearchResult};
