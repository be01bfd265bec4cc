//! OpenAI Responses API types.
//!
//! Provider-specific request/response structures for HTTP communication
//! with the Responses API. They are NOT the generic completion types from
//! vitrine-types -- those are provider-agnostic.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/responses`.
#[derive(Debug, Clone, Serialize)]
pub struct ResponsesRequest {
    pub model: String,
    /// The system instruction.
    pub instructions: String,
    pub input: Vec<InputItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// A single input turn.
#[derive(Debug, Clone, Serialize)]
pub struct InputItem {
    pub role: String,
    pub content: Vec<InputContent>,
}

/// Typed input content blocks.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum InputContent {
    #[serde(rename = "input_text")]
    InputText { text: String },
}

/// Response body for a non-streaming Responses API call.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponsesResponse {
    pub id: String,
    pub model: String,
    #[serde(default)]
    pub output: Vec<OutputItem>,
    /// Aggregated-text convenience field some server versions include.
    #[serde(default)]
    pub output_text: Option<String>,
}

/// Items in the `output` array. Reasoning items and anything else we do
/// not consume deserialize to `Other` instead of failing the whole body.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum OutputItem {
    #[serde(rename = "message")]
    Message {
        #[serde(default)]
        content: Vec<OutputContent>,
    },
    #[serde(other)]
    Other,
}

/// Content blocks inside a message output item.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum OutputContent {
    #[serde(rename = "output_text")]
    OutputText { text: String },
    #[serde(other)]
    Other,
}

impl ResponsesResponse {
    /// Extract the first non-blank text segment, falling back to the
    /// aggregated `output_text` field when the block scan finds nothing.
    pub fn first_text(&self) -> Option<&str> {
        for item in &self.output {
            if let OutputItem::Message { content } = item {
                for block in content {
                    if let OutputContent::OutputText { text } = block {
                        if !text.trim().is_empty() {
                            return Some(text);
                        }
                    }
                }
            }
        }
        self.output_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Error envelope returned by the API on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub message: Option<String>,
    pub code: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_text_skips_non_message_items() {
        let json = r#"{
            "id": "resp_abc",
            "model": "gpt-4.1-mini",
            "output": [
                {"type": "reasoning", "summary": []},
                {"type": "message", "content": [
                    {"type": "output_text", "text": "Hello there."}
                ]}
            ]
        }"#;
        let response: ResponsesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), Some("Hello there."));
    }

    #[test]
    fn first_text_falls_back_to_the_aggregated_field() {
        let json = r#"{
            "id": "resp_abc",
            "model": "gpt-4.1-mini",
            "output": [],
            "output_text": "Aggregated."
        }"#;
        let response: ResponsesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), Some("Aggregated."));
    }

    #[test]
    fn blank_segments_count_as_absent() {
        let json = r#"{
            "id": "resp_abc",
            "model": "gpt-4.1-mini",
            "output": [
                {"type": "message", "content": [
                    {"type": "output_text", "text": "   "}
                ]}
            ]
        }"#;
        let response: ResponsesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn unknown_content_blocks_are_tolerated() {
        let json = r#"{
            "id": "resp_abc",
            "model": "gpt-4.1-mini",
            "output": [
                {"type": "message", "content": [
                    {"type": "refusal", "refusal": "no"},
                    {"type": "output_text", "text": "but actually"}
                ]}
            ]
        }"#;
        let response: ResponsesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), Some("but actually"));
    }

    #[test]
    fn error_body_parses_the_quota_code() {
        let json = r#"{"error": {"message": "You exceeded your current quota",
                       "type": "insufficient_quota", "code": "insufficient_quota"}}"#;
        let body: ApiErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(
            body.error.unwrap().code.as_deref(),
            Some("insufficient_quota")
        );
    }
}
