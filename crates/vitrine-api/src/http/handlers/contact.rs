//! Contact form endpoint.
//!
//! POST /api/contact
//!
//! Validates the four required fields and relays the submission by email.
//! Relay failures surface as 503 with a direct-contact instruction --
//! unlike the chat path there is no safe fake for a sent email.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use vitrine_types::contact::ContactAck;

use crate::http::error::ApiError;
use crate::state::AppState;

/// Request body. Fields are optional at the serde layer; emptiness is
/// the service's validation concern.
#[derive(Debug, Deserialize)]
pub struct ContactBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// POST /api/contact -- validate and relay one submission.
pub async fn submit(
    State(state): State<AppState>,
    Json(body): Json<ContactBody>,
) -> Result<Json<ContactAck>, ApiError> {
    let ack = state
        .contact
        .submit(
            body.name.as_deref().unwrap_or_default(),
            body.email.as_deref().unwrap_or_default(),
            body.subject.as_deref().unwrap_or_default(),
            body.message.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(ack))
}
