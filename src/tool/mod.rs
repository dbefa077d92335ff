//! Tool-calling adapter
//!
//! Exposes the Serper client to agent frameworks as a named tool with a
//! blocking and an async entry point. Failures come back as values.

mod outcome;

pub use outcome::{ToolContent, ToolOutcome};

use crate::config::Settings;
use crate::error::Result;
use crate::results::SearchOutput;
use crate::search::SerperClient;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// A tool callable by an agent framework with a single text query
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name
    fn name(&self) -> &str;

    /// Description shown to the model
    fn description(&self) -> &str;

    /// JSON schema of the tool arguments
    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                }
            },
            "required": ["query"]
        })
    }

    /// Run on the calling thread
    fn run(&self, query: &str) -> ToolOutcome;

    /// Run on the current async task
    async fn arun(&self, query: &str) -> ToolOutcome;
}

/// Serper web search as a tool
#[derive(Debug)]
pub struct SerperSearchTool {
    name: String,
    description: String,
    max_results: u32,
    client: SerperClient,
}

impl SerperSearchTool {
    pub const NAME: &'static str = "serper_search";
    pub const DESCRIPTION: &'static str = "A wrapper around Serper Search API. \
        Useful for when you need to answer questions about current events. \
        Input should be a search query.";

    /// Wrap an existing client
    pub fn new(client: SerperClient) -> Self {
        Self {
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            max_results: client.max_results(),
            client,
        }
    }

    /// Build from settings, resolving the API key
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(SerperClient::from_settings(settings)?))
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn client(&self) -> &SerperClient {
        &self.client
    }

    fn report(&self, mode: &str, outcome: &ToolOutcome) {
        match outcome {
            ToolOutcome::Success { results, .. } => {
                debug!(
                    "{} [{}]: {}",
                    self.name,
                    mode,
                    serde_json::to_string_pretty(results).unwrap_or_default()
                );
            }
            ToolOutcome::Failure { error, kind } => {
                warn!("{} [{}] failed ({}): {}", self.name, mode, kind, error);
            }
        }
    }
}

#[async_trait]
impl Tool for SerperSearchTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn run(&self, query: &str) -> ToolOutcome {
        let outcome: ToolOutcome = self
            .client
            .raw_results_blocking(query, self.max_results)
            .map(SearchOutput::from_raw)
            .into();
        self.report("sync", &outcome);
        outcome
    }

    async fn arun(&self, query: &str) -> ToolOutcome {
        let outcome: ToolOutcome = self
            .client
            .raw_results(query, self.max_results)
            .await
            .map(SearchOutput::from_raw)
            .into();
        self.report("async", &outcome);
        outcome
    }
}
