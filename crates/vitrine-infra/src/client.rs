//! HTTP implementation of the session's [`ReplyTransport`] port.
//!
//! Speaks the `POST /api/chat` wire contract so Rust front ends (or
//! integration tests) can drive a [`vitrine_core::session::ChatSession`]
//! against a running gateway.

use vitrine_core::session::ReplyTransport;
use vitrine_types::chat::{ChatReply, ChatRequest, TransportError};

/// Client for the gateway's chat endpoint.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/chat", self.base_url.trim_end_matches('/'))
    }
}

impl ReplyTransport for GatewayClient {
    async fn send(&self, message: &str) -> Result<String, TransportError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&ChatRequest {
                message: message.to_string(),
            })
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body: ChatReply = response
            .json()
            .await
            .map_err(|e| TransportError::MalformedBody(e.to_string()))?;

        Ok(body.reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_doubled_slashes() {
        let client = GatewayClient::new("http://localhost:5000/");
        assert_eq!(client.endpoint(), "http://localhost:5000/api/chat");

        let client = GatewayClient::new("http://localhost:5000");
        assert_eq!(client.endpoint(), "http://localhost:5000/api/chat");
    }
}
