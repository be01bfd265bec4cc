//! The chat gateway: one user message in, one reply string out.
//!
//! Stateless per request. Hides every upstream failure mode behind the
//! same contract: once the message validates, `reply` always yields text,
//! sourced live or synthesized locally. The only failure that propagates
//! is a missing message, which the caller is expected to correct and
//! resend.

use vitrine_types::chat::ChatError;
use vitrine_types::config::Persona;
use vitrine_types::llm::CompletionRequest;

use crate::fallback::FallbackReplies;
use crate::llm::CompletionClient;

/// Where a reply came from. Diagnostic only; the wire contract carries
/// just the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Live,
    Fallback,
}

/// A reply produced by the gateway.
#[derive(Debug, Clone)]
pub struct GatewayReply {
    pub text: String,
    pub source: ReplySource,
}

/// Stateless translator from a user message to a reply.
///
/// `upstream` is `None` in fallback-only mode (no credential configured
/// at startup); no network call is ever attempted in that mode.
pub struct ChatGateway<C> {
    upstream: Option<C>,
    model: String,
    system_prompt: String,
    fallback: FallbackReplies,
}

impl<C: CompletionClient> ChatGateway<C> {
    pub fn new(persona: &Persona, model: impl Into<String>, upstream: Option<C>) -> Self {
        Self {
            upstream,
            model: model.into(),
            system_prompt: system_prompt(persona),
            fallback: FallbackReplies::gateway(persona),
        }
    }

    /// Whether an upstream credential is configured.
    pub fn is_live(&self) -> bool {
        self.upstream.is_some()
    }

    /// Produce a reply for `message`.
    ///
    /// Fails only on a missing/empty message. Upstream errors of every
    /// kind -- quota, outage, unusable response -- resolve to a fallback
    /// reply; quota exhaustion is logged apart from genuine failures but
    /// treated identically at this contract.
    pub async fn reply(&self, message: &str) -> Result<GatewayReply, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::MissingMessage);
        }

        let Some(upstream) = &self.upstream else {
            return Ok(self.fallback_reply(message));
        };

        let request = CompletionRequest {
            model: self.model.clone(),
            system: self.system_prompt.clone(),
            input: message.to_string(),
            max_output_tokens: None,
            temperature: None,
        };

        match upstream.complete(&request).await {
            Ok(response) => {
                let text = response.text.trim();
                if text.is_empty() {
                    // Upstream replied but gave nothing usable; same as an outage.
                    tracing::warn!(provider = upstream.name(), "empty upstream reply");
                    Ok(self.fallback_reply(message))
                } else {
                    Ok(GatewayReply {
                        text: text.to_string(),
                        source: ReplySource::Live,
                    })
                }
            }
            Err(err) if err.is_quota() => {
                tracing::warn!(provider = upstream.name(), "upstream quota exhausted");
                Ok(self.fallback_reply(message))
            }
            Err(err) => {
                tracing::error!(provider = upstream.name(), error = %err, "upstream call failed");
                Ok(self.fallback_reply(message))
            }
        }
    }

    fn fallback_reply(&self, message: &str) -> GatewayReply {
        GatewayReply {
            text: self.fallback.reply_for(message).to_string(),
            source: ReplySource::Fallback,
        }
    }
}

/// The fixed system instruction sent with every live request.
fn system_prompt(persona: &Persona) -> String {
    format!(
        "You are an AI assistant embedded in the portfolio of {name}. \
         You know their skills ({skills}), their projects ({projects}), \
         and their experience ({experience}). Provide concise, friendly \
         answers. If unsure, say so and point the user to the contact \
         section or email {email}.",
        name = persona.name,
        skills = persona.skills,
        projects = persona.projects,
        experience = persona.experience,
        email = persona.email,
    )
}
