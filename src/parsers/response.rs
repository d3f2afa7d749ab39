use crate::models::SearchResponse;

/// Parse a search endpoint response body
///
/// Unknown fields are ignored so the backend can grow its contract without
/// breaking older clients.
pub fn parse_search_response(body: &str) -> serde_json::Result<SearchResponse> {
    serde_json::from_str(body)
}
