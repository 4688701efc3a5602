//! ChatProvider trait definition.
//!
//! This is the seam between the pipeline and the two provider backends.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition); the
//! pipeline is generic over its providers, so no boxing is needed.

use tandem_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for chat-completion backends (Anthropic, OpenAI).
///
/// Implementations live in tandem-infra.
pub trait ChatProvider: Send + Sync {
    /// Human-readable provider name (e.g., "anthropic", "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
