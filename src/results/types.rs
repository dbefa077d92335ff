//! Result type definitions

use serde::{Deserialize, Serialize};

/// Score given to every normalized result
pub const DEFAULT_SCORE: f64 = 1.0;

/// Type of result
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    #[default]
    Page,
}

/// A provider-independent search result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedResult {
    #[serde(rename = "type")]
    pub result_type: ResultType,
    pub title: String,
    pub url: String,
    pub content: String,
    pub score: f64,
}

impl NormalizedResult {
    /// Create a page result with the default score
    pub fn page(
        title: impl Into<String>,
        url: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            result_type: ResultType::Page,
            title: title.into(),
            url: url.into(),
            content: content.into(),
            score: DEFAULT_SCORE,
        }
    }
}

/// One entry of Serper's `organic` array
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganicEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub snippet: Option<String>,
}

impl From<OrganicEntry> for NormalizedResult {
    fn from(entry: OrganicEntry) -> Self {
        NormalizedResult::page(
            entry.title.unwrap_or_default(),
            entry.link.unwrap_or_default(),
            entry.snippet.unwrap_or_default(),
        )
    }
}

/// Normalized results together with the payload they came from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchOutput {
    pub results: Vec<NormalizedResult>,
    pub raw: serde_json::Value,
}

impl SearchOutput {
    /// Normalize `raw` and keep it alongside the results
    pub fn from_raw(raw: serde_json::Value) -> Self {
        Self {
            results: super::normalize(&raw),
            raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_shape() {
        let result = NormalizedResult::page("Apple", "https://apple.com", "Apple Inc. site");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "type": "page",
                "title": "Apple",
                "url": "https://apple.com",
                "content": "Apple Inc. site",
                "score": 1.0
            })
        );
    }

    #[test]
    fn test_entry_defaults() {
        let result: NormalizedResult = OrganicEntry {
            title: Some("Only title".into()),
            ..Default::default()
        }
        .into();
        assert_eq!(result.title, "Only title");
        assert_eq!(result.url, "");
        assert_eq!(result.content, "");
        assert_eq!(result.score, DEFAULT_SCORE);
    }
}
