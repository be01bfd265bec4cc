//! Application error type mapping to HTTP status codes and `{"error": ...}`
//! bodies.
//!
//! Only the unmasked failures appear here: chat validation, contact
//! validation, and relay unavailability. Upstream outages never reach this
//! type -- the gateway converts them to fallback replies before the
//! handler sees anything.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use vitrine_types::chat::ChatError;
use vitrine_types::contact::ContactError;

/// Application-level error surfaced to HTTP callers.
#[derive(Debug)]
pub enum ApiError {
    /// Rejected request; the caller should correct and resend.
    Validation(String),
    /// A collaborator this request needs is not available.
    Unavailable(String),
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::MissingMessage => ApiError::Validation("Message is required.".to_string()),
        }
    }
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::MissingFields => {
                ApiError::Validation("All fields are required.".to_string())
            }
            ContactError::InvalidEmail => ApiError::Validation("Invalid email.".to_string()),
            ContactError::Unavailable { contact } => ApiError::Unavailable(format!(
                "Email service unavailable. Please use: {contact}"
            )),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Unavailable(message) => (StatusCode::SERVICE_UNAVAILABLE, message),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
