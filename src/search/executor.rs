//! Serper search execution

use super::models::SearchRequest;
use crate::config::{Credential, OutgoingSettings, Settings};
use crate::error::Result;
use crate::network::{BlockingHttpClient, HttpClient, PostRequest};
use crate::results::SearchOutput;
use once_cell::sync::OnceCell;
use serde_json::Value;
use tracing::{debug, info};

/// Client for the Serper search API
///
/// Every call performs exactly one POST. The blocking transport is built on
/// first blocking use.
pub struct SerperClient {
    credential: Credential,
    endpoint: String,
    max_results: u32,
    outgoing: OutgoingSettings,
    client: HttpClient,
    blocking: OnceCell<BlockingHttpClient>,
}

impl SerperClient {
    /// Create a client, taking the key from `api_key` or `SERPER_API_KEY`
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let credential = Credential::resolve(api_key)?;
        Self::with_credential(credential, &Settings::default())
    }

    /// Create a client from loaded settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let credential = Credential::resolve(settings.serper.api_key.clone())?;
        Self::with_credential(credential, settings)
    }

    /// Create a client from an already resolved credential
    pub fn with_credential(credential: Credential, settings: &Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            credential,
            endpoint: settings.serper.endpoint.clone(),
            max_results: settings.serper.max_results,
            client: HttpClient::with_settings(&settings.outgoing)?,
            outgoing: settings.outgoing.clone(),
            blocking: OnceCell::new(),
        })
    }

    /// Set the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the default result count
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    /// Fetch the raw Serper response, suspending the current task
    pub async fn raw_results(&self, query: &str, num: u32) -> Result<Value> {
        let post = self.prepare(query, num)?;
        self.client.post_json(&post).await
    }

    /// Fetch the raw Serper response, blocking the current thread
    pub fn raw_results_blocking(&self, query: &str, num: u32) -> Result<Value> {
        let post = self.prepare(query, num)?;
        let client = self
            .blocking
            .get_or_try_init(|| BlockingHttpClient::with_settings(&self.outgoing))?;
        client.post_json(&post)
    }

    /// Search with the default result count and normalize the response
    pub async fn search(&self, query: &str) -> Result<SearchOutput> {
        let raw = self.raw_results(query, self.max_results).await?;
        Ok(Self::finish(query, raw))
    }

    /// Blocking variant of [`SerperClient::search`]
    pub fn search_blocking(&self, query: &str) -> Result<SearchOutput> {
        let raw = self.raw_results_blocking(query, self.max_results)?;
        Ok(Self::finish(query, raw))
    }

    fn prepare(&self, query: &str, num: u32) -> Result<PostRequest> {
        let request = SearchRequest::new(query, num);
        request.validate()?;
        info!("Serper search '{}' (num={})", request.query, request.num);
        request.to_post(&self.endpoint, self.credential.expose())
    }

    fn finish(query: &str, raw: Value) -> SearchOutput {
        let output = SearchOutput::from_raw(raw);
        debug!("Serper returned {} results for '{}'", output.results.len(), query);
        output
    }
}

impl std::fmt::Debug for SerperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerperClient")
            .field("credential", &self.credential)
            .field("endpoint", &self.endpoint)
            .field("max_results", &self.max_results)
            .finish()
    }
}
