//! The client chat session: the owner of the visible conversation.
//!
//! Guarantees: every submitted message gets exactly one reply (remote or
//! locally synthesized), at most one request is in flight, and a request
//! superseded by cancellation never produces a visible message -- even if
//! its result races in after the fact.
//!
//! State transitions are synchronous (`begin` / `resolve` /
//! `cancel_pending`) and separately testable from I/O; [`ChatSession::send`]
//! composes them around a [`ReplyTransport`] call. Cancellation is advisory
//! to the transport and authoritative at `resolve`: results are applied
//! only after an identity check against the current in-flight handle.

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use vitrine_types::chat::{ChatEntry, TransportError};
use vitrine_types::config::Persona;

use crate::fallback::FallbackReplies;

/// Transport used by the session to reach the gateway.
///
/// Implementations live in vitrine-infra; tests substitute mocks.
pub trait ReplyTransport: Send + Sync {
    /// Send one message, resolving to the reply text.
    fn send(
        &self,
        message: &str,
    ) -> impl std::future::Future<Output = Result<String, TransportError>> + Send;
}

/// Handle for a request accepted by [`ChatSession::begin`].
///
/// Carries the submitted text (for local fallback synthesis) and the
/// cancellation token the transport should observe.
#[derive(Debug)]
pub struct PendingReply {
    id: Uuid,
    token: CancellationToken,
    text: String,
}

impl PendingReply {
    /// The trimmed text that was submitted.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Clone of the cancellation token for this request.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}

/// How a submission settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input or a request already outstanding; nothing changed.
    Ignored,
    /// The remote reply was appended.
    Replied,
    /// The transport failed; a locally synthesized reply was appended.
    Fallback,
    /// The request was superseded; no message was appended.
    Cancelled,
}

struct InFlight {
    id: Uuid,
    token: CancellationToken,
}

/// The ordered message log plus at-most-one in-flight request.
pub struct ChatSession {
    entries: Vec<ChatEntry>,
    current: Option<InFlight>,
    sending: bool,
    fallback: FallbackReplies,
}

impl ChatSession {
    /// Create a session seeded with the greeting entry.
    pub fn new(persona: &Persona) -> Self {
        let greeting = format!(
            "Hi! I'm the assistant for {}. Ask about skills, projects, or how to get in touch.",
            persona.name
        );
        Self {
            entries: vec![ChatEntry::bot(greeting)],
            current: None,
            sending: false,
            fallback: FallbackReplies::session(persona),
        }
    }

    /// The conversation log, oldest first.
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    /// True exactly while a request is outstanding; gates input disabling
    /// and spinner display in a front end.
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Accept a submission: append the user entry, supersede any existing
    /// request, and hand back the in-flight handle.
    ///
    /// Returns `None` (a silent no-op) when the trimmed input is empty or
    /// a request is already outstanding -- rapid double-submissions are
    /// dropped, not queued.
    pub fn begin(&mut self, input: &str) -> Option<PendingReply> {
        let text = input.trim();
        if text.is_empty() || self.sending {
            return None;
        }

        self.entries.push(ChatEntry::user(text));

        // Supersede any leftover handle before installing the new one.
        if let Some(previous) = self.current.take() {
            previous.token.cancel();
        }

        let id = Uuid::now_v7();
        let token = CancellationToken::new();
        self.current = Some(InFlight {
            id,
            token: token.clone(),
        });
        self.sending = true;

        Some(PendingReply {
            id,
            token,
            text: text.to_string(),
        })
    }

    /// Apply a settled result. Authoritative cancellation point: a result
    /// whose handle is no longer current, or whose token was cancelled, is
    /// discarded without appending anything.
    pub fn resolve(
        &mut self,
        pending: PendingReply,
        result: Result<String, TransportError>,
    ) -> SubmitOutcome {
        let is_current = self.current.as_ref().is_some_and(|c| c.id == pending.id);
        if is_current {
            self.current = None;
            self.sending = false;
        }

        if !is_current || pending.token.is_cancelled() {
            return SubmitOutcome::Cancelled;
        }

        match result {
            Ok(reply) => {
                self.entries.push(ChatEntry::bot(reply));
                SubmitOutcome::Replied
            }
            Err(err) => {
                tracing::warn!(error = %err, "chat request failed, synthesizing local reply");
                let reply = self.fallback.reply_for(&pending.text).to_string();
                self.entries.push(ChatEntry::bot(reply));
                SubmitOutcome::Fallback
            }
        }
    }

    /// Cancel and drop the in-flight request (teardown or supersession).
    /// Its eventual result, if any, will be discarded by `resolve`.
    pub fn cancel_pending(&mut self) {
        if let Some(in_flight) = self.current.take() {
            in_flight.token.cancel();
        }
        self.sending = false;
    }

    /// Submit a message end to end: `begin`, race the transport against
    /// the cancellation token, `resolve`.
    pub async fn send<T: ReplyTransport>(&mut self, input: &str, transport: &T) -> SubmitOutcome {
        let Some(pending) = self.begin(input) else {
            return SubmitOutcome::Ignored;
        };

        let token = pending.token();
        let result = tokio::select! {
            biased;
            _ = token.cancelled() => Err(TransportError::Network("request superseded".to_string())),
            result = transport.send(pending.text()) => result,
        };

        self.resolve(pending, result)
    }
}
