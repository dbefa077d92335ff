//! Serper-Search: a Serper web search adapter for tool-calling agents
//!
//! Sends one query to the Serper API, blocking or async, and normalizes the
//! `organic` results into provider-independent records.

pub mod config;
pub mod error;
pub mod network;
pub mod results;
pub mod search;
pub mod tool;

pub use config::Settings;
pub use error::{ErrorKind, Result, SearchError};
pub use results::{normalize, NormalizedResult, SearchOutput};
pub use search::{SearchRequest, SerperClient};
pub use tool::{SerperSearchTool, Tool, ToolContent, ToolOutcome};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Results requested when the caller gives no count
pub const DEFAULT_MAX_RESULTS: u32 = 10;
