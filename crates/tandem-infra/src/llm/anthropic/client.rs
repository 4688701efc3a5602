//! AnthropicProvider -- concrete [`ChatProvider`] implementation for
//! Anthropic Claude.
//!
//! Sends non-streaming requests to the Anthropic Messages API
//! (`/v1/messages`) with proper authentication headers. The body is
//! parsed to a `serde_json::Value` first so the untouched payload can be
//! carried back for the observability dump, then deserialized into the
//! typed shape for extraction.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never
//! logged or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use tandem_core::llm::provider::ChatProvider;
use tandem_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use super::types::{AnthropicContentBlock, AnthropicMessage, AnthropicRequest, AnthropicResponse};

/// Anthropic Claude chat provider for the refactor stage.
pub struct AnthropicProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl AnthropicProvider {
    /// The Anthropic API version header value.
    const API_VERSION: &'static str = "2023-06-01";

    /// Create a new Anthropic provider.
    ///
    /// `request_timeout` bounds each HTTP attempt at the transport level;
    /// the call wrapper applies the same bound around the whole call.
    pub fn new(api_key: SecretString, request_timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://api.anthropic.com".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Convert a generic [`CompletionRequest`] into an [`AnthropicRequest`].
    fn to_anthropic_request(request: &CompletionRequest) -> AnthropicRequest {
        let messages = request
            .messages
            .iter()
            .map(|m| AnthropicMessage {
                role: m.role.to_string(),
                content: m.content.clone(),
            })
            .collect();

        AnthropicRequest {
            model: request.model.clone(),
            max_tokens: request.max_tokens,
            messages,
            system: request.system.clone(),
        }
    }
}

// AnthropicProvider intentionally does NOT derive Debug. The SecretString
// field ensures the API key is never printed, and omitting Debug entirely
// keeps the rest of the internal state out of logs as well.

impl ChatProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        if request.messages.is_empty() {
            return Err(LlmError::InvalidRequest(
                "conversation turns must be non-empty".to_string(),
            ));
        }

        let body = Self::to_anthropic_request(request);
        let url = self.url("/v1/messages");
        tracing::debug!(model = %body.model, "sending Anthropic completion request");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", self.api_key.expose_secret())
            .header("anthropic-version", Self::API_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let retry_after_ms = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(|secs| secs * 1_000);
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited { retry_after_ms },
                _ => LlmError::Api(format!("HTTP {status}: {error_body}")),
            });
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to read response body: {e}")))?;
        let parsed: AnthropicResponse = serde_json::from_value(raw.clone())
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        // Each text block is trimmed before joining, so the extracted text
        // is already in the shape the next stage forwards.
        let content = parsed
            .content
            .iter()
            .filter_map(|block| match block {
                AnthropicContentBlock::Text { text } => Some(text.trim()),
                AnthropicContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("\n");

        Ok(CompletionResponse { content, raw })
    }
}

/// Classify a reqwest transport failure: timeouts are retry-eligible,
/// everything else is a connection failure.
fn map_transport_error(err: reqwest::Error) -> LlmError {
    if err.is_timeout() {
        LlmError::Timeout
    } else {
        LlmError::Connection(err.to_string())
    }
}
