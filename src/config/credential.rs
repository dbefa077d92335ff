//! API key resolution

use crate::error::{Result, SearchError};

/// Environment variable consulted when no key is passed explicitly
pub const API_KEY_ENV: &str = "SERPER_API_KEY";

/// A non-empty Serper API key
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Resolve from an explicit key, falling back to `SERPER_API_KEY`
    pub fn resolve(explicit: Option<String>) -> Result<Self> {
        Self::resolve_with(explicit, |key| std::env::var(key).ok())
    }

    /// Resolve using a custom variable lookup
    pub fn resolve_with<F>(explicit: Option<String>, lookup: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        explicit
            .filter(|k| !k.is_empty())
            .or_else(|| lookup(API_KEY_ENV))
            .filter(|k| !k.is_empty())
            .map(Self)
            .ok_or(SearchError::MissingApiKey)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_wins() {
        let cred = Credential::resolve_with(Some("explicit".into()), |_| Some("env".into())).unwrap();
        assert_eq!(cred.expose(), "explicit");
    }

    #[test]
    fn falls_back_to_env() {
        let cred = Credential::resolve_with(None, |k| {
            assert_eq!(k, API_KEY_ENV);
            Some("env".into())
        })
        .unwrap();
        assert_eq!(cred.expose(), "env");

        let cred = Credential::resolve_with(Some(String::new()), |_| Some("env".into())).unwrap();
        assert_eq!(cred.expose(), "env");
    }

    #[test]
    fn missing_key_fails() {
        let err = Credential::resolve_with(None, |_| None).unwrap_err();
        assert!(matches!(err, SearchError::MissingApiKey));

        let err = Credential::resolve_with(Some(String::new()), |_| Some(String::new())).unwrap_err();
        assert!(matches!(err, SearchError::MissingApiKey));
    }

    #[test]
    fn debug_redacts() {
        let cred = Credential::resolve_with(Some("secret-key".into()), |_| None).unwrap();
        assert!(!format!("{:?}", cred).contains("secret-key"));
    }
}
