//! Search request model

use crate::error::{Result, SearchError};
use crate::network::PostRequest;
use crate::DEFAULT_MAX_RESULTS;
use serde::{Deserialize, Serialize};

/// Body of a Serper search call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    /// The search query string
    #[serde(rename = "q")]
    pub query: String,
    /// Number of results requested
    pub num: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, num: u32) -> Self {
        Self {
            query: query.into(),
            num,
        }
    }

    /// Request with the default result count
    pub fn simple(query: impl Into<String>) -> Self {
        Self::new(query, DEFAULT_MAX_RESULTS)
    }

    /// Reject requests that would never be worth sending
    pub fn validate(&self) -> Result<()> {
        if self.query.trim().is_empty() {
            return Err(SearchError::InvalidRequest("query must not be empty".into()));
        }
        if self.num == 0 {
            return Err(SearchError::InvalidRequest("num must be at least 1".into()));
        }
        Ok(())
    }

    /// Build the POST sent to `endpoint`, authenticated with `api_key`
    pub fn to_post(&self, endpoint: &str, api_key: &str) -> Result<PostRequest> {
        let body = serde_json::to_value(self)?;
        Ok(PostRequest::json(endpoint, body).header("X-API-KEY", api_key))
    }
}
