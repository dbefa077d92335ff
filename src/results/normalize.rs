//! Mapping from Serper payloads to normalized results

use super::types::{NormalizedResult, OrganicEntry};
use serde_json::Value;

/// Normalize the `organic` array of a raw Serper response.
///
/// Never fails: a missing or non-array `organic` yields no results, and any
/// missing or non-string field becomes an empty string.
pub fn normalize(raw: &Value) -> Vec<NormalizedResult> {
    raw.get("organic")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .map(|entry| NormalizedResult::from(organic_entry(entry)))
                .collect()
        })
        .unwrap_or_default()
}

fn organic_entry(entry: &Value) -> OrganicEntry {
    let field = |name: &str| entry.get(name).and_then(Value::as_str).map(str::to_string);
    OrganicEntry {
        title: field("title"),
        link: field("link"),
        snippet: field("snippet"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ResultType;
    use serde_json::json;

    #[test]
    fn test_apple_example() {
        let raw = json!({
            "organic": [
                {"title": "Apple", "link": "https://apple.com", "snippet": "Apple Inc. site"}
            ]
        });

        let results = normalize(&raw);
        assert_eq!(
            serde_json::to_value(&results).unwrap(),
            json!([{
                "type": "page",
                "title": "Apple",
                "url": "https://apple.com",
                "content": "Apple Inc. site",
                "score": 1.0
            }])
        );
    }

    #[test]
    fn test_preserves_order_and_count() {
        let raw = json!({
            "searchParameters": {"q": "rust"},
            "organic": [
                {"title": "one", "link": "https://one.example", "snippet": "1", "position": 1},
                {"title": "two", "link": "https://two.example", "snippet": "2", "position": 2},
                {"title": "three", "link": "https://three.example", "snippet": "3", "position": 3}
            ]
        });

        let results = normalize(&raw);
        assert_eq!(results.len(), 3);
        let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["one", "two", "three"]);
        assert!(results
            .iter()
            .all(|r| r.result_type == ResultType::Page && r.score == 1.0));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let raw = json!({
            "organic": [
                {},
                {"link": "https://only-link.example"},
                {"title": 42, "snippet": null}
            ]
        });

        let results = normalize(&raw);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], NormalizedResult::page("", "", ""));
        assert_eq!(results[1].url, "https://only-link.example");
        assert_eq!(results[1].title, "");
        assert_eq!(results[2].title, "");
        assert_eq!(results[2].content, "");
    }

    #[test]
    fn test_absent_or_empty_organic() {
        assert!(normalize(&json!({})).is_empty());
        assert!(normalize(&json!({"organic": []})).is_empty());
        assert!(normalize(&json!({"organic": "nope"})).is_empty());
        assert!(normalize(&Value::Null).is_empty());
    }

    #[test]
    fn test_non_object_entries() {
        let results = normalize(&json!({"organic": ["string", 7]}));
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.title.is_empty() && r.url.is_empty()));
    }
}
