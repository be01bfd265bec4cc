//! Chat endpoint.
//!
//! POST /api/chat
//!
//! One message in, one reply out. The gateway masks every upstream
//! failure behind a fallback reply, so this handler returns 200 for
//! anything past message validation -- the conversational UI never shows
//! an error state.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use vitrine_core::gateway::ReplySource;
use vitrine_types::chat::ChatReply;

use crate::http::error::ApiError;
use crate::state::AppState;

/// Request body. `message` is optional at the serde layer so its absence
/// reaches the gateway's validation instead of a framework rejection.
#[derive(Debug, Deserialize)]
pub struct ChatBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// POST /api/chat -- produce a reply for one user message.
pub async fn create_reply(
    State(state): State<AppState>,
    Json(body): Json<ChatBody>,
) -> Result<Json<ChatReply>, ApiError> {
    let message = body.message.unwrap_or_default();
    let reply = state.gateway.reply(&message).await?;

    if reply.source == ReplySource::Fallback {
        tracing::debug!("serving a fallback reply");
    }

    Ok(Json(ChatReply { reply: reply.text }))
}
