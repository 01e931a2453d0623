//! Request and result types for the AI assist flow.

use serde::{Deserialize, Serialize};

use crate::error::{OprError, Result};

/// Register the generated prose should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    Enthusiastic,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Enthusiastic => "enthusiastic",
        }
    }
}

/// Input for one assist invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub program_name: String,
    /// Rough notes from the user, usually point form.
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
}

impl GenerationRequest {
    pub fn new(program_name: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            program_name: program_name.into(),
            notes: notes.into(),
            tone: None,
        }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    /// Checks the caller-side precondition: both program name and notes must
    /// be non-empty.
    ///
    /// Content generators do not call this; the editor shell does, before
    /// any request is issued.
    pub fn ensure_ready(&self) -> Result<()> {
        if self.program_name.trim().is_empty() {
            return Err(OprError::precondition("program name is required"));
        }
        if self.notes.trim().is_empty() {
            return Err(OprError::precondition("notes are required"));
        }
        Ok(())
    }
}

/// Normalized output of the content generator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationResult {
    pub summary: String,
    pub objectives: Vec<String>,
}

impl GenerationResult {
    pub fn new(summary: impl Into<String>, objectives: Vec<String>) -> Self {
        Self {
            summary: summary.into(),
            objectives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_ready_accepts_complete_request() {
        let request = GenerationRequest::new("Gotong Royong", "- cat blok A");
        assert!(request.ensure_ready().is_ok());
    }

    #[test]
    fn test_ensure_ready_rejects_missing_fields() {
        let no_name = GenerationRequest::new("", "- cat blok A");
        assert!(no_name.ensure_ready().unwrap_err().is_precondition());

        let no_notes = GenerationRequest::new("Gotong Royong", "   ");
        assert!(no_notes.ensure_ready().unwrap_err().is_precondition());

        let blank_name = GenerationRequest::new(" \t\n", "- cat blok A");
        assert!(blank_name.ensure_ready().unwrap_err().is_precondition());
    }

    #[test]
    fn test_tone_serializes_lowercase() {
        let request = GenerationRequest::new("A", "B").with_tone(Tone::Enthusiastic);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["tone"], "enthusiastic");
        assert_eq!(json["programName"], "A");

        let untoned = serde_json::to_value(GenerationRequest::new("A", "B")).unwrap();
        assert!(untoned.get("tone").is_none());
    }
}
