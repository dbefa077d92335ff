//! Configuration module for serper-search
//!
//! Handles loading settings from YAML files and environment variables,
//! and resolving the API key.

mod credential;
mod settings;

pub use credential::*;
pub use settings::*;

use crate::error::Result;
use std::path::PathBuf;
use tracing::{debug, info};

/// Load settings from the first settings file found, then apply environment overrides
pub fn load() -> Result<Settings> {
    load_with(|key| std::env::var(key).ok())
}

/// Same as [`load`], reading variables through `lookup`
fn load_with<F>(lookup: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = match find_settings_file(&lookup) {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => {
            debug!("No settings file found, using defaults");
            Settings::default()
        }
    };
    settings.merge_from(lookup);
    settings.validate()?;
    Ok(settings)
}

/// Locate a settings file, checking SERPER_SETTINGS_PATH first
fn find_settings_file<F>(lookup: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = lookup("SERPER_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    let mut paths = vec![
        PathBuf::from("serper.yml"),
        PathBuf::from("config/serper.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("serper-search/serper.yml"));
    }

    paths.into_iter().find(|p| p.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use std::collections::HashMap;
    use std::io::Write;

    fn settings_file(yaml: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_from_settings_path() {
        let file = settings_file(
            "serper:\n  api_key: file-key\n  max_results: 4\noutgoing:\n  request_timeout: 12.5\n",
        );
        let path = file.path().to_string_lossy().into_owned();

        let settings = load_with(|k| (k == "SERPER_SETTINGS_PATH").then(|| path.clone())).unwrap();

        assert_eq!(settings.serper.api_key.as_deref(), Some("file-key"));
        assert_eq!(settings.serper.max_results, 4);
        assert_eq!(settings.outgoing.request_timeout, 12.5);
        assert_eq!(settings.serper.endpoint, SERPER_SEARCH_URL);
    }

    #[test]
    fn test_env_overrides_file() {
        let file = settings_file("serper:\n  api_key: file-key\n  max_results: 4\n");
        let path = file.path().to_string_lossy().into_owned();
        let vars: HashMap<&str, String> = [
            ("SERPER_SETTINGS_PATH", path),
            ("SERPER_API_KEY", "env-key".to_string()),
            ("SERPER_MAX_RESULTS", "7".to_string()),
        ]
        .into_iter()
        .collect();

        let settings = load_with(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(settings.serper.api_key.as_deref(), Some("env-key"));
        assert_eq!(settings.serper.max_results, 7);
    }

    #[test]
    fn test_invalid_file_values_rejected() {
        let file = settings_file("serper:\n  max_results: 0\n");
        let path = file.path().to_string_lossy().into_owned();

        let err = load_with(|k| (k == "SERPER_SETTINGS_PATH").then(|| path.clone())).unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn test_missing_settings_path_falls_through() {
        let missing = std::env::temp_dir().join("serper-search-does-not-exist.yml");
        let missing = missing.to_string_lossy().into_owned();

        let found = find_settings_file(&|k: &str| (k == "SERPER_SETTINGS_PATH").then(|| missing.clone()));
        assert_ne!(found, Some(PathBuf::from(&missing)));
    }

    #[test]
    fn test_from_file_reports_path() {
        let err = Settings::from_file("/nonexistent/serper.yml").unwrap_err();
        match err {
            SearchError::Config(msg) => assert!(msg.contains("/nonexistent/serper.yml")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
