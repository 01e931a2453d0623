//! Secret configuration file storage.
//!
//! Loads the Gemini credential from `~/.config/opr/secret.json`.

use std::fs;
use std::path::{Path, PathBuf};

use opr_core::config::{GeminiConfig, SecretConfig};
use opr_core::{OprError, Result};

/// Errors that can occur during secret storage operations.
#[derive(Debug)]
pub enum SecretStorageError {
    /// Configuration file not found.
    NotFound(PathBuf),
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON parsing error.
    ParseError(serde_json::Error),
    /// Config directory not found.
    ConfigDirNotFound,
}

impl std::fmt::Display for SecretStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretStorageError::NotFound(path) => {
                write!(f, "Secret file not found at: {}", path.display())
            }
            SecretStorageError::IoError(e) => write!(f, "I/O error: {}", e),
            SecretStorageError::ParseError(e) => write!(f, "JSON parse error: {}", e),
            SecretStorageError::ConfigDirNotFound => {
                write!(f, "Could not determine config directory")
            }
        }
    }
}

impl std::error::Error for SecretStorageError {}

impl From<std::io::Error> for SecretStorageError {
    fn from(e: std::io::Error) -> Self {
        SecretStorageError::IoError(e)
    }
}

impl From<serde_json::Error> for SecretStorageError {
    fn from(e: serde_json::Error) -> Self {
        SecretStorageError::ParseError(e)
    }
}

impl From<SecretStorageError> for OprError {
    fn from(e: SecretStorageError) -> Self {
        OprError::config(e.to_string())
    }
}

/// Read-only access to `secret.json`.
///
/// The file is plaintext JSON and should be readable only by its owner.
pub struct SecretStorage {
    path: PathBuf,
}

impl SecretStorage {
    /// Uses the default location, `~/.config/opr/secret.json`.
    pub fn new() -> std::result::Result<Self, SecretStorageError> {
        let path = Self::default_path()?;
        Ok(Self { path })
    }

    /// Uses a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> std::result::Result<SecretConfig, SecretStorageError> {
        if !self.path.exists() {
            return Err(SecretStorageError::NotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&content)?;

        Ok(config)
    }

    /// Loads the `gemini` section, failing with a configuration error when the
    /// file or the section is missing.
    pub fn load_gemini_config(&self) -> Result<GeminiConfig> {
        let gemini = self.load()?.gemini.ok_or_else(|| {
            OprError::config(format!(
                "Gemini configuration not found in {}",
                self.path.display()
            ))
        })?;
        gemini.validate()?;
        Ok(gemini)
    }

    fn default_path() -> std::result::Result<PathBuf, SecretStorageError> {
        dirs::config_dir()
            .map(|dir| dir.join("opr").join("secret.json"))
            .ok_or(SecretStorageError::ConfigDirNotFound)
    }
}

/// Resolves the Gemini configuration at call time: the `API_KEY` /
/// `GEMINI_API_KEY` environment variables win, then `secret.json`.
pub fn resolve_gemini_config(storage: &SecretStorage) -> Result<GeminiConfig> {
    resolve_gemini_config_with(storage, |key| std::env::var(key).ok())
}

/// [`resolve_gemini_config`] with a custom environment source.
pub fn resolve_gemini_config_with<F>(storage: &SecretStorage, lookup: F) -> Result<GeminiConfig>
where
    F: Fn(&str) -> Option<String>,
{
    match GeminiConfig::from_lookup(lookup) {
        Ok(config) => Ok(config),
        Err(env_err) => storage.load_gemini_config().map_err(|file_err| {
            tracing::warn!(%env_err, %file_err, "No Gemini credential configured");
            OprError::config(format!("{env_err}; {file_err}"))
        }),
    }
}
