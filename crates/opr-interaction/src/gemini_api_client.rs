//! GeminiApiClient - Direct REST API client for Gemini.
//!
//! Sends a single text prompt to `generateContent` and asks the service to
//! constrain its answer to `application/json`.

use async_trait::async_trait;
use opr_core::Result;
use opr_core::config::GeminiConfig;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::completion::{CompletionError, JsonCompletion};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const JSON_MIME_TYPE: &str = "application/json";

/// Client for the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiApiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiApiClient {
    /// Creates a client from explicit configuration.
    ///
    /// A blank API key is a configuration error and is reported here, before
    /// any request can be made.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            client: Client::new(),
            api_key: config.api_key,
            model: config
                .model_name
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{model}:generateContent",
            self.base_url.trim_end_matches('/'),
            model = self.model
        )
    }

    async fn send_request(
        &self,
        body: &GenerateContentRequest,
    ) -> std::result::Result<String, CompletionError> {
        tracing::debug!(model = %self.model, "Sending Gemini generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|err| CompletionError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| CompletionError::Decode(err.to_string()))?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl JsonCompletion for GeminiApiClient {
    async fn complete_json(&self, prompt: &str) -> std::result::Result<String, CompletionError> {
        let request = GenerateContentRequest::json_prompt(prompt);
        self.send_request(&request).await
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn json_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE.to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(
    response: GenerateContentResponse,
) -> std::result::Result<String, CompletionError> {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .filter(|text| !text.trim().is_empty())
        .ok_or(CompletionError::EmptyResponse)
}

fn map_http_error(status: StatusCode, body: String) -> CompletionError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    CompletionError::Http {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_fails_at_construction() {
        let err = GeminiApiClient::new(GeminiConfig::new("  ")).err().unwrap();
        assert!(err.is_config());
    }

    #[test]
    fn test_defaults_and_endpoint() {
        let client = GeminiApiClient::new(GeminiConfig::new("key")).unwrap();
        assert_eq!(client.model(), DEFAULT_GEMINI_MODEL);
        assert_eq!(
            client.endpoint(),
            format!("{DEFAULT_BASE_URL}/gemini-3-flash-preview:generateContent")
        );

        let custom = GeminiApiClient::new(
            GeminiConfig::new("key")
                .with_model("gemini-2.5-flash")
                .with_base_url("http://127.0.0.1:9000/models/"),
        )
        .unwrap();
        assert_eq!(
            custom.endpoint(),
            "http://127.0.0.1:9000/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_body_asks_for_json() {
        let body = serde_json::to_value(GenerateContentRequest::json_prompt("hello")).unwrap();
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_extract_text_from_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"summary\":\"S\"}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(
            extract_text_response(response).unwrap(),
            r#"{"summary":"S"}"#
        );
    }

    #[test]
    fn test_extract_text_missing_is_empty_response() {
        for raw in [
            r#"{}"#,
            r#"{"candidates":[]}"#,
            r#"{"candidates":[{"content":{"parts":[]}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#,
        ] {
            let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
            assert!(matches!(
                extract_text_response(response),
                Err(CompletionError::EmptyResponse)
            ));
        }
    }

    #[test]
    fn test_map_http_error_reads_error_envelope() {
        let err = map_http_error(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#
                .to_string(),
        );
        match err {
            CompletionError::Http { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "RESOURCE_EXHAUSTED: Quota exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_map_http_error_falls_back_to_raw_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert!(matches!(
            err,
            CompletionError::Http { status: 502, ref message } if message == "upstream down"
        ));
    }
}
