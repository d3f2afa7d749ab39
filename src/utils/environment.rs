use std::env;

use anyhow::{Context, Result, bail};
use reqwest::Url;

/// Environment variable selecting the search endpoint
pub const API_URL_ENV: &str = "CIVICLY_API_URL";

/// Endpoint used when nothing else is configured
pub const DEFAULT_SEARCH_ENDPOINT: &str = "http://localhost:8000/search";

/// Get the search endpoint from `CIVICLY_API_URL`, falling back to the local default
pub fn get_search_endpoint() -> Result<String> {
    match env::var(API_URL_ENV) {
        Ok(value) if !value.trim().is_empty() => validate_endpoint(&value)
            .with_context(|| format!("{} is not a usable search endpoint", API_URL_ENV)),
        _ => Ok(DEFAULT_SEARCH_ENDPOINT.to_string()),
    }
}

/// Check that an endpoint is an absolute http(s) URL, returning it trimmed
pub fn validate_endpoint(endpoint: &str) -> Result<String> {
    let endpoint = endpoint.trim();
    let url = Url::parse(endpoint).with_context(|| format!("Invalid URL: '{}'", endpoint))?;

    match url.scheme() {
        "http" | "https" => {}
        other => bail!("Unsupported URL scheme '{}' (expected http or https)", other),
    }
    if url.host_str().is_none() {
        bail!("URL has no host: '{}'", endpoint);
    }

    Ok(endpoint.to_string())
}
