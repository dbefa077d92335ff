//! Prepared requests and response decoding shared by both transports

use crate::error::{Result, SearchError};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;
use serde_json::Value;

/// A JSON POST ready to be sent by either transport
#[derive(Debug, Clone)]
pub struct PostRequest {
    /// URL to request
    pub url: String,
    /// Request headers, in insertion order
    pub headers: Vec<(String, String)>,
    /// JSON body
    pub body: Value,
}

impl PostRequest {
    /// Create a POST with a JSON body and the matching content type
    pub fn json(url: impl Into<String>, body: Value) -> Self {
        Self {
            url: url.into(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body,
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Look up a header value by case-insensitive name
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Headers as sent on the wire
    pub fn header_map(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (key, value) in &self.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| SearchError::InvalidRequest(format!("header '{}': {}", key, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| SearchError::InvalidRequest(format!("header '{}': {}", key, e)))?;
            map.insert(name, value);
        }
        Ok(map)
    }
}

/// Turn a status and fully-read body into a JSON value
pub fn decode_response(status: StatusCode, text: &str) -> Result<Value> {
    if !status.is_success() {
        return Err(SearchError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }
    Ok(serde_json::from_str(text)?)
}
