//! Error types for the OPR builder.

use thiserror::Error;

/// A shared error type for the entire OPR builder.
///
/// Variants mirror the failure taxonomy of the editor: precondition
/// violations are caught before any work starts, configuration errors are
/// fatal for the call that hit them, and every generation failure collapses
/// into the single [`OprError::GenerationFailed`] variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OprError {
    /// Caller-side precondition not met (e.g. missing program name or notes)
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Configuration error (missing credential, unreadable secret file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The content generation service could not produce a usable result.
    ///
    /// Network, authentication, quota and malformed-response failures are
    /// deliberately not distinguished.
    #[error("Content generation failed")]
    GenerationFailed,

    /// An assist request is already outstanding
    #[error("A content generation request is already in progress")]
    AssistBusy,

    /// Index outside the addressable range of a sequence
    #[error("Index {index} out of range for {target} (len {len})")]
    InvalidIndex {
        target: &'static str,
        index: usize,
        len: usize,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Print host failure
    #[error("Print error: {0}")]
    Print(String),
}

impl OprError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Precondition error
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an InvalidIndex error
    pub fn invalid_index(target: &'static str, index: usize, len: usize) -> Self {
        Self::InvalidIndex { target, index, len }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Print error
    pub fn print(message: impl Into<String>) -> Self {
        Self::Print(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    pub fn is_generation_failed(&self) -> bool {
        matches!(self, Self::GenerationFailed)
    }

    /// Message shown to the person editing the report.
    ///
    /// Only the assist-flow failures have dedicated wording; everything else
    /// falls back to the `Display` text.
    pub fn user_message(&self) -> String {
        match self {
            Self::Precondition(_) => {
                "Sila masukkan Nama Program dan Nota ringkas untuk AI menjana laporan.".to_string()
            }
            Self::GenerationFailed => "Gagal menjana laporan. Sila cuba lagi.".to_string(),
            Self::AssistBusy => "Laporan sedang dijana. Sila tunggu.".to_string(),
            other => other.to_string(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for OprError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for OprError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<minijinja::Error> for OprError {
    fn from(err: minijinja::Error) -> Self {
        Self::Serialization {
            format: "template".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, OprError>`.
pub type Result<T> = std::result::Result<T, OprError>;
