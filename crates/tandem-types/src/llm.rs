//! LLM request/response types for tandem.
//!
//! These types model the data shapes for one chat-completion round trip:
//! the request sent to a provider, the reduced response, and the error
//! taxonomy the call wrapper and pipeline route on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a message in an LLM conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(MessageRole::System),
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single message in an LLM conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Request to an LLM provider for a completion.
///
/// Immutable once constructed; the pipeline builds one per stage and the
/// provider translates it into its wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub max_tokens: u32,
}

/// Response from an LLM provider, reduced to the extracted assistant text.
///
/// `raw` carries the untouched provider payload for the observability dump;
/// nothing else of the provider's structure is retained.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub content: String,
    pub raw: serde_json::Value,
}

/// Errors from LLM provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("API error: {0}")]
    Api(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl LlmError {
    /// Whether this error is in the retry-eligible timeout class.
    pub fn is_timeout(&self) -> bool {
        matches!(self, LlmError::Timeout)
    }
}

/// Outcome of one pipeline stage, keeping success and failure distinct.
///
/// `Text` may legitimately be empty (the provider answered with nothing);
/// `Failed` records an error the stage absorbed instead of propagating.
/// Downstream both forward an empty string as prompt content, but the
/// distinction stays visible for logging and classification.
#[derive(Debug)]
pub enum StageReply {
    Text(String),
    Failed(LlmError),
}

impl StageReply {
    /// The content forwarded to the next stage: the text on success, an
    /// empty string on an absorbed failure.
    pub fn prompt_content(&self) -> &str {
        match self {
            StageReply::Text(text) => text,
            StageReply::Failed(_) => "",
        }
    }
}
