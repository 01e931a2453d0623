//! Configuration for the content generation service.

use serde::{Deserialize, Serialize};

use crate::error::{OprError, Result};

/// Environment variable holding the Gemini credential.
pub const API_KEY_ENV: &str = "API_KEY";
/// Fallback environment variable for the Gemini credential.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Root structure of `secret.json`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API configuration.
///
/// Passed explicitly to the client constructor; the client never reads
/// process state on its own.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
    /// Overrides the REST endpoint root (e.g. for a proxy).
    #[serde(default)]
    pub base_url: Option<String>,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model_name: None,
            base_url: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_name = Some(model.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Reads the credential from `API_KEY`, falling back to `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GeminiConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        [API_KEY_ENV, GEMINI_API_KEY_ENV]
            .into_iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty())
            .map(Self::new)
            .ok_or_else(|| {
                OprError::config(format!(
                    "API key not found in environment ({API_KEY_ENV} or {GEMINI_API_KEY_ENV})"
                ))
            })
    }

    /// Fails with a configuration error when the credential is blank.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(OprError::config("Gemini API key is empty"));
        }
        Ok(())
    }
}

// Never print the key.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_prefers_api_key() {
        let config =
            GeminiConfig::from_lookup(lookup(&[("API_KEY", "primary"), ("GEMINI_API_KEY", "b")]))
                .unwrap();
        assert_eq!(config.api_key, "primary");
        assert!(config.model_name.is_none());
    }

    #[test]
    fn test_from_lookup_falls_back() {
        let config = GeminiConfig::from_lookup(lookup(&[("API_KEY", " "), ("GEMINI_API_KEY", "b")]))
            .unwrap();
        assert_eq!(config.api_key, "b");
    }

    #[test]
    fn test_from_lookup_missing_is_config_error() {
        let err = GeminiConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_validate_rejects_blank_key() {
        assert!(GeminiConfig::new("").validate().unwrap_err().is_config());
        assert!(GeminiConfig::new("k").validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", GeminiConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("redacted"));
    }

    #[test]
    fn test_secret_config_parses_optional_fields() {
        let config: SecretConfig =
            serde_json::from_str(r#"{"gemini": {"api_key": "k", "model_name": "m"}}"#).unwrap();
        let gemini = config.gemini.unwrap();
        assert_eq!(gemini.model_name.as_deref(), Some("m"));
        assert!(gemini.base_url.is_none());
    }
}
