//! Upstream completion request/response types.
//!
//! These are the provider-agnostic shapes the gateway speaks to its
//! upstream port. Each request is single-turn: a fixed system instruction
//! plus the raw user message, no conversational memory.

use serde::{Deserialize, Serialize};

/// A single-turn request to the upstream completion service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    /// Fixed system instruction describing the portfolio owner.
    pub system: String,
    /// The raw user message.
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// The extracted result of a completion call.
///
/// `text` is the first plain-text segment of the upstream response and may
/// be empty when the upstream replied without usable content -- the gateway
/// treats that the same as an outage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub model: String,
    pub text: String,
}

/// Errors from upstream completion calls.
///
/// `QuotaExceeded` is distinguished from the rest for diagnostics only;
/// the gateway recovers every variant with a fallback reply.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("quota exhausted")]
    QuotaExceeded,

    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl UpstreamError {
    /// Whether this error is a quota-exhaustion signal (logged at a
    /// different level than genuine outages).
    pub fn is_quota(&self) -> bool {
        matches!(self, UpstreamError::QuotaExceeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_without_empty_options() {
        let request = CompletionRequest {
            model: "gpt-4.1-mini".to_string(),
            system: "Be helpful".to_string(),
            input: "Hello".to_string(),
            max_output_tokens: None,
            temperature: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("max_output_tokens"));
        assert!(!json.contains("temperature"));
    }

    #[test]
    fn quota_is_distinguished() {
        assert!(UpstreamError::QuotaExceeded.is_quota());
        assert!(
            !UpstreamError::Provider {
                message: "HTTP 500".to_string()
            }
            .is_quota()
        );
    }

    #[test]
    fn error_display() {
        let err = UpstreamError::Provider {
            message: "HTTP 529: overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "provider error: HTTP 529: overloaded");
    }
}
