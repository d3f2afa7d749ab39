//! Parsers for search endpoint responses
//!
//! Malformed bodies are reported as `serde_json::Error`; the client maps them to
//! [`crate::client::SearchError::Parse`], which the page treats like any other
//! failed request.

pub mod deserializers;
pub mod response;

pub use deserializers::parse_meeting_date;
pub use response::parse_search_response;
