//! Tool invocation outcomes

use crate::error::{ErrorKind, SearchError};
use crate::results::{NormalizedResult, SearchOutput};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of a tool run; never an `Err`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolOutcome {
    Success {
        results: Vec<NormalizedResult>,
        raw: Value,
    },
    Failure {
        error: String,
        kind: ErrorKind,
    },
}

/// First half of the tool-call pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolContent {
    Results(Vec<NormalizedResult>),
    Error(String),
}

impl ToolOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Split into `(results or error text, raw response or {})`
    pub fn into_parts(self) -> (ToolContent, Value) {
        match self {
            Self::Success { results, raw } => (ToolContent::Results(results), raw),
            Self::Failure { error, .. } => (ToolContent::Error(error), Value::Object(Map::new())),
        }
    }
}

impl From<crate::error::Result<SearchOutput>> for ToolOutcome {
    fn from(result: crate::error::Result<SearchOutput>) -> Self {
        match result {
            Ok(SearchOutput { results, raw }) => Self::Success { results, raw },
            Err(e) => e.into(),
        }
    }
}

impl From<SearchError> for ToolOutcome {
    fn from(err: SearchError) -> Self {
        Self::Failure {
            kind: err.kind(),
            error: err.to_string(),
        }
    }
}
