//! CompletionClient trait definition.
//!
//! The abstraction the gateway speaks to its upstream completion service.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition); the
//! concrete implementation lives in vitrine-infra.

use vitrine_types::llm::{CompletionRequest, CompletionResponse, UpstreamError};

/// A client for an upstream completion service.
///
/// One call per user message, single-turn, non-streaming. Implementations
/// must map quota-exhaustion signals to [`UpstreamError::QuotaExceeded`]
/// so the gateway can log them apart from genuine outages.
pub trait CompletionClient: Send + Sync {
    /// Human-readable provider name for logs (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a single-turn completion request and extract the reply text.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, UpstreamError>> + Send;
}
