//! Runtime configuration resolved from flags and the environment.
//!
//! Endpoint precedence: `--endpoint` flag, then `CIVICLY_API_URL`, then
//! `http://localhost:8000/search`.

use anyhow::Result;

use crate::models::City;
use crate::utils::{get_search_endpoint, validate_endpoint};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: String,
    pub city: City,
}

impl AppConfig {
    pub fn resolve(endpoint_flag: Option<&str>, city: City) -> Result<Self> {
        let endpoint = match endpoint_flag {
            Some(flag) => validate_endpoint(flag)?,
            None => get_search_endpoint()?,
        };

        Ok(Self { endpoint, city })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: crate::utils::DEFAULT_SEARCH_ENDPOINT.to_string(),
            city: City::default(),
        }
    }
}
