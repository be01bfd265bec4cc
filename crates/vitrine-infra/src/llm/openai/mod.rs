//! OpenAiCompletionClient -- concrete [`CompletionClient`] for the OpenAI
//! Responses API.
//!
//! Sends single-turn requests to `/v1/responses` with bearer
//! authentication and extracts the first plain-text output segment.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

pub mod types;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use vitrine_core::llm::CompletionClient;
use vitrine_types::llm::{CompletionRequest, CompletionResponse, UpstreamError};

use self::types::{ApiErrorBody, InputContent, InputItem, ResponsesRequest, ResponsesResponse};

/// Completion client for the OpenAI Responses API.
///
/// # API Key Security
///
/// The key is stored as a [`SecretString`] and only exposed when building
/// the authorization header. The struct deliberately does not derive
/// `Debug` so it can never leak through logging.
pub struct OpenAiCompletionClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl OpenAiCompletionClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com";

    /// Create a new client.
    ///
    /// `timeout` bounds each request; `None` keeps the transport default,
    /// matching the behavior of not configuring one at all.
    pub fn new(api_key: SecretString, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Convert a generic [`CompletionRequest`] into a [`ResponsesRequest`].
    fn to_responses_request(request: &CompletionRequest) -> ResponsesRequest {
        ResponsesRequest {
            model: request.model.clone(),
            instructions: request.system.clone(),
            input: vec![InputItem {
                role: "user".to_string(),
                content: vec![InputContent::InputText {
                    text: request.input.clone(),
                }],
            }],
            max_output_tokens: request.max_output_tokens,
            temperature: request.temperature,
        }
    }
}

impl CompletionClient for OpenAiCompletionClient {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, UpstreamError> {
        let body = Self::to_responses_request(request);
        let url = self.url("/v1/responses");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(classify_error(status.as_u16(), &error_body));
        }

        let parsed: ResponsesResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::Deserialization(format!("failed to parse response: {e}")))?;

        let text = parsed.first_text().unwrap_or_default().trim().to_string();

        Ok(CompletionResponse {
            id: parsed.id,
            model: parsed.model,
            text,
        })
    }
}

/// Map a non-success HTTP status (plus its body) to an [`UpstreamError`].
///
/// Quota exhaustion arrives either as a 429 status or as an
/// `insufficient_quota` error code on another status; both map to
/// [`UpstreamError::QuotaExceeded`].
fn classify_error(status: u16, body: &str) -> UpstreamError {
    match status {
        401 => UpstreamError::AuthenticationFailed,
        429 => UpstreamError::QuotaExceeded,
        _ => {
            if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
                let code = parsed.error.as_ref().and_then(|e| e.code.as_deref());
                if code == Some("insufficient_quota") {
                    return UpstreamError::QuotaExceeded;
                }
            }
            UpstreamError::Provider {
                message: format!("HTTP {status}: {body}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_client() -> OpenAiCompletionClient {
        OpenAiCompletionClient::new(SecretString::from("test-key-not-real"), None)
    }

    fn make_request() -> CompletionRequest {
        CompletionRequest {
            model: "gpt-4.1-mini".to_string(),
            system: "Be helpful".to_string(),
            input: "Hello".to_string(),
            max_output_tokens: None,
            temperature: None,
        }
    }

    #[test]
    fn client_name() {
        assert_eq!(make_client().name(), "openai");
    }

    #[test]
    fn base_url_override() {
        let client = make_client().with_base_url("http://localhost:8080");
        assert_eq!(
            client.url("/v1/responses"),
            "http://localhost:8080/v1/responses"
        );
    }

    #[test]
    fn request_conversion_wraps_the_message_as_input_text() {
        let converted = OpenAiCompletionClient::to_responses_request(&make_request());
        let json = serde_json::to_value(&converted).unwrap();

        assert_eq!(json["model"], "gpt-4.1-mini");
        assert_eq!(json["instructions"], "Be helpful");
        assert_eq!(json["input"][0]["role"], "user");
        assert_eq!(json["input"][0]["content"][0]["type"], "input_text");
        assert_eq!(json["input"][0]["content"][0]["text"], "Hello");
        assert!(json.get("max_output_tokens").is_none());
    }

    #[test]
    fn status_429_is_quota() {
        assert!(matches!(
            classify_error(429, ""),
            UpstreamError::QuotaExceeded
        ));
    }

    #[test]
    fn insufficient_quota_code_is_quota_regardless_of_status() {
        let body = r#"{"error": {"code": "insufficient_quota", "message": "out"}}"#;
        assert!(matches!(
            classify_error(400, body),
            UpstreamError::QuotaExceeded
        ));
    }

    #[test]
    fn status_401_is_authentication() {
        assert!(matches!(
            classify_error(401, ""),
            UpstreamError::AuthenticationFailed
        ));
    }

    #[test]
    fn other_statuses_are_provider_errors() {
        let err = classify_error(503, "upstream down");
        match err {
            UpstreamError::Provider { message } => {
                assert!(message.contains("503"));
                assert!(message.contains("upstream down"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
