//! Chat log and wire contract types for the assistant pipeline.
//!
//! A conversation is an append-only ordered sequence of [`ChatEntry`]
//! values. Entries are immutable once created; the id exists only for
//! list-rendering identity and carries no other meaning.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a chat entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

/// A single entry in the conversation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEntry {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
}

impl ChatEntry {
    /// Create a user-authored entry with a fresh id.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            sender: Sender::User,
            text: text.into(),
        }
    }

    /// Create a bot-authored entry with a fresh id.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// The one chat failure that is surfaced rather than masked: the caller
/// sent no usable message, so there is nothing to answer or fall back from.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message is required")]
    MissingMessage,
}

/// Failures of the client-side request to the gateway.
///
/// All variants are recovered locally by the session with a synthesized
/// fallback reply; none are shown to the user as raw errors.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_constructors_set_sender() {
        let user = ChatEntry::user("hi");
        assert_eq!(user.sender, Sender::User);
        let bot = ChatEntry::bot("hello");
        assert_eq!(bot.sender, Sender::Bot);
        assert_ne!(user.id, bot.id);
    }

    #[test]
    fn sender_serde() {
        let json = serde_json::to_string(&Sender::Bot).unwrap();
        assert_eq!(json, "\"bot\"");
        let parsed: Sender = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, Sender::User);
    }

    #[test]
    fn chat_reply_roundtrip() {
        let json = r#"{"reply":"hello there"}"#;
        let reply: ChatReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.reply, "hello there");
    }

    #[test]
    fn transport_error_display() {
        assert_eq!(
            TransportError::Status(503).to_string(),
            "unexpected status 503"
        );
    }
}
