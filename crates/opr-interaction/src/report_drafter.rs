//! Report drafter: the content generation client used by the assist flow.
//!
//! Builds the drafting prompt, sends it through a [`JsonCompletion`] backend
//! and validates the JSON answer into a [`GenerationResult`]. Every failure
//! after the prompt is built collapses into `OprError::GenerationFailed`.

use async_trait::async_trait;
use opr_core::config::GeminiConfig;
use opr_core::generation::{ContentGenerator, GenerationRequest, GenerationResult};
use opr_core::{OprError, Result};
use serde_json::Value;
use thiserror::Error;

use crate::completion::JsonCompletion;
use crate::gemini_api_client::GeminiApiClient;
use crate::prompt::ReportPrompt;

/// Why a response body was rejected. Logged, never returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error("response body is empty")]
    Empty,

    #[error("response body is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("response JSON is not an object")]
    NotAnObject,

    #[error("field `{0}` has the wrong shape")]
    WrongShape(&'static str),
}

/// Content generator that drafts report prose through a JSON completion
/// backend.
pub struct ReportDrafter<C> {
    completion: C,
}

/// The drafter wired to the Gemini REST API.
pub type GeminiReportDrafter = ReportDrafter<GeminiApiClient>;

impl<C: JsonCompletion> ReportDrafter<C> {
    pub fn new(completion: C) -> Self {
        Self { completion }
    }

    pub fn completion(&self) -> &C {
        &self.completion
    }
}

impl GeminiReportDrafter {
    /// Builds a Gemini-backed drafter. Fails with a configuration error when
    /// the credential is missing; no request is attempted.
    pub fn gemini(config: GeminiConfig) -> Result<Self> {
        Ok(Self::new(GeminiApiClient::new(config)?))
    }
}

#[async_trait]
impl<C: JsonCompletion> ContentGenerator for ReportDrafter<C> {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let prompt = ReportPrompt::new(request).render()?;

        let body = self.completion.complete_json(&prompt).await.map_err(|err| {
            tracing::error!(error = %err, "Content generation request failed");
            OprError::GenerationFailed
        })?;

        parse_generation_response(&body).map_err(|err| {
            tracing::error!(error = %err, "Content generation returned an unusable response");
            OprError::GenerationFailed
        })
    }
}

/// Validates a raw response body.
///
/// The body must be a bare JSON object. `summary` and `objectives` default to
/// empty when absent or `null`; any other non-string summary, or objectives
/// that are not an array of strings, reject the whole response.
pub fn parse_generation_response(
    body: &str,
) -> std::result::Result<GenerationResult, ResponseError> {
    if body.trim().is_empty() {
        return Err(ResponseError::Empty);
    }

    let value: Value =
        serde_json::from_str(body).map_err(|err| ResponseError::InvalidJson(err.to_string()))?;
    let object = value.as_object().ok_or(ResponseError::NotAnObject)?;

    let summary = match object.get("summary") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(_) => return Err(ResponseError::WrongShape("summary")),
    };

    let objectives = match object.get("objectives") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .ok_or(ResponseError::WrongShape("objectives"))?,
        Some(_) => return Err(ResponseError::WrongShape("objectives")),
    };

    Ok(GenerationResult {
        summary,
        objectives,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_complete_response() {
        let result =
            parse_generation_response(r#"{"summary":"X","objectives":["A","B"]}"#).unwrap();
        assert_eq!(result.summary, "X");
        assert_eq!(result.objectives, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let result = parse_generation_response("{}").unwrap();
        assert_eq!(result, GenerationResult::default());

        let nulls = parse_generation_response(r#"{"summary":null,"objectives":null}"#).unwrap();
        assert_eq!(nulls, GenerationResult::default());
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let result =
            parse_generation_response(r#"{"summary":"X","objectives":[],"title":"T"}"#).unwrap();
        assert_eq!(result.summary, "X");
        assert!(result.objectives.is_empty());
    }

    #[test]
    fn test_rejects_non_json_and_empty_bodies() {
        assert_eq!(parse_generation_response("  "), Err(ResponseError::Empty));
        assert!(matches!(
            parse_generation_response("Berikut adalah laporan anda"),
            Err(ResponseError::InvalidJson(_))
        ));
        assert!(matches!(
            parse_generation_response("```json\n{\"summary\":\"X\"}\n```"),
            Err(ResponseError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_rejects_non_object_json() {
        assert_eq!(
            parse_generation_response(r#"["A","B"]"#),
            Err(ResponseError::NotAnObject)
        );
    }

    #[test]
    fn test_rejects_wrong_shaped_fields() {
        assert_eq!(
            parse_generation_response(r#"{"summary":"X","objectives":"A"}"#),
            Err(ResponseError::WrongShape("objectives"))
        );
        assert_eq!(
            parse_generation_response(r#"{"summary":"X","objectives":["A",2]}"#),
            Err(ResponseError::WrongShape("objectives"))
        );
        assert_eq!(
            parse_generation_response(r#"{"summary":42}"#),
            Err(ResponseError::WrongShape("summary"))
        );
    }

    #[test]
    fn test_gemini_constructor_requires_key() {
        let err = GeminiReportDrafter::gemini(GeminiConfig::new(""))
            .err()
            .unwrap();
        assert!(err.is_config());
    }
}
