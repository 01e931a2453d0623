//! Transport seam between the report drafter and a text-generation backend.

use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a completion backend.
///
/// These categories are kept for diagnostics only; callers of the report
/// drafter see a single generic failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("failed to decode response envelope: {0}")]
    Decode(String),

    #[error("service returned no text")]
    EmptyResponse,
}

/// A backend that answers a prompt with JSON text.
///
/// Implementations must ask the service for a JSON-typed response rather
/// than free text, and return the raw text exactly as received.
#[async_trait]
pub trait JsonCompletion: Send + Sync {
    async fn complete_json(&self, prompt: &str) -> Result<String, CompletionError>;
}
