//! Settings structures for serper-search configuration

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default Serper search endpoint
pub const SERPER_SEARCH_URL: &str = "https://google.serper.dev/search";

/// Main settings structure matching serper.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub serper: SerperSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SearchError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| SearchError::Config(e.to_string()))
    }

    /// Merge with environment variables (SERPER_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_from(|key| std::env::var(key).ok());
    }

    /// Merge overrides from an arbitrary variable lookup
    pub fn merge_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("SERPER_API_KEY") {
            if !val.is_empty() {
                self.serper.api_key = Some(val);
            }
        }
        if let Some(val) = lookup("SERPER_ENDPOINT") {
            self.serper.endpoint = val;
        }
        if let Some(val) = lookup("SERPER_MAX_RESULTS") {
            if let Ok(n) = val.parse() {
                self.serper.max_results = n;
            }
        }
        if let Some(val) = lookup("SERPER_TIMEOUT") {
            if let Ok(secs) = val.parse() {
                self.outgoing.request_timeout = secs;
            }
        }
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.serper.endpoint).map_err(|e| {
            SearchError::Config(format!("invalid endpoint '{}': {}", self.serper.endpoint, e))
        })?;
        if self.serper.max_results == 0 {
            return Err(SearchError::Config("max_results must be > 0".into()));
        }
        self.outgoing.timeout()?;
        Ok(())
    }
}

/// Serper API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SerperSettings {
    /// API key (falls back to SERPER_API_KEY)
    pub api_key: Option<String>,
    /// Search endpoint
    pub endpoint: String,
    /// Results requested per search
    pub max_results: u32,
}

impl Default for SerperSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: SERPER_SEARCH_URL.to_string(),
            max_results: crate::DEFAULT_MAX_RESULTS,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// User agent string
    pub user_agent: String,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 30.0,
            user_agent: format!("serper-search/{}", crate::VERSION),
            verify_ssl: true,
            proxies: ProxySettings::default(),
        }
    }
}

impl OutgoingSettings {
    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Result<Duration> {
        if self.request_timeout <= 0.0 {
            return Err(SearchError::Config("request_timeout must be > 0".into()));
        }
        Duration::try_from_secs_f64(self.request_timeout)
            .map_err(|_| SearchError::Config("request_timeout out of range".into()))
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}
