//! Contact form types and validation primitives.

use serde::{Deserialize, Serialize};

/// A validated contact form submission.
///
/// All fields are non-empty after trimming and `email` passes
/// [`is_valid_email`]; construction goes through the contact service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Success body for `POST /api/contact`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactAck {
    pub status: String,
    pub message: String,
}

impl ContactAck {
    /// The acknowledgement returned after a relayed submission.
    pub fn sent() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Your message has been sent.".to_string(),
        }
    }
}

/// Errors from the contact path.
///
/// Unlike the chat path, these surface to the caller: there is no safe
/// substitute for actually sending an email, so pretending would mislead.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("all fields are required")]
    MissingFields,

    #[error("invalid email")]
    InvalidEmail,

    #[error("email service unavailable, use {contact} directly")]
    Unavailable { contact: String },
}

/// Errors from the email relay adapter.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("email relay not configured")]
    NotConfigured,

    #[error("relay failure: {0}")]
    Relay(String),
}

/// Shallow address check: one `@`, no whitespace, and a dot-separated
/// host with non-empty segments on both sides of some dot.
///
/// Matches the permissive `^[^\s@]+@[^\s@]+\.[^\s@]+$` shape -- a
/// deliverability check, not RFC 5322 parsing.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, host)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || host.is_empty() || host.contains('@') {
        return false;
    }
    host.char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < host.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("someone@example.com"));
        assert!(is_valid_email("a.b+tag@sub.example.co"));
    }

    #[test]
    fn rejects_missing_at_or_host_dot() {
        assert!(!is_valid_email("someone.example.com"));
        assert!(!is_valid_email("someone@example"));
    }

    #[test]
    fn rejects_empty_parts() {
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("someone@"));
        assert!(!is_valid_email("someone@.com"));
        assert!(!is_valid_email("someone@example."));
    }

    #[test]
    fn rejects_whitespace_and_double_at() {
        assert!(!is_valid_email("some one@example.com"));
        assert!(!is_valid_email("someone@ex@ample.com"));
    }

    #[test]
    fn ack_shape() {
        let ack = ContactAck::sent();
        assert_eq!(ack.status, "ok");
        assert!(ack.message.contains("sent"));
    }

    #[test]
    fn unavailable_names_the_direct_contact() {
        let err = ContactError::Unavailable {
            contact: "owner@example.dev".to_string(),
        };
        assert!(err.to_string().contains("owner@example.dev"));
    }
}
