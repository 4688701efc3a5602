//! Environment-based configuration.
//!
//! API keys and pipeline overrides are read once at process startup.
//! Missing keys are NOT validated here: an absent variable becomes an
//! empty secret and surfaces as an authentication failure on the first
//! provider call.

use std::time::Duration;

use secrecy::SecretString;

use tandem_core::pipeline::PipelineConfig;

/// Env var holding the Anthropic API key.
pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
/// Env var holding the OpenAI API key.
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

const REFACTOR_MODEL: &str = "TANDEM_REFACTOR_MODEL";
const REVIEW_MODEL: &str = "TANDEM_REVIEW_MODEL";
const MAX_TOKENS: &str = "TANDEM_MAX_TOKENS";
const REQUEST_TIMEOUT_SECS: &str = "TANDEM_REQUEST_TIMEOUT_SECS";

/// Resolved startup configuration: the two provider keys plus the
/// pipeline settings.
pub struct Settings {
    pub anthropic_api_key: SecretString,
    pub openai_api_key: SecretString,
    pub pipeline: PipelineConfig,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Unparseable numeric
    /// overrides fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut pipeline = PipelineConfig::default();

        if let Some(model) = lookup(REFACTOR_MODEL) {
            pipeline.refactor_model = model;
        }
        if let Some(model) = lookup(REVIEW_MODEL) {
            pipeline.review_model = model;
        }
        if let Some(tokens) = lookup(MAX_TOKENS).and_then(|v| v.parse().ok()) {
            pipeline.max_tokens = tokens;
        }
        if let Some(secs) = lookup(REQUEST_TIMEOUT_SECS).and_then(|v| v.parse().ok()) {
            pipeline.request_timeout = Duration::from_secs(secs);
        }

        Self {
            anthropic_api_key: SecretString::from(lookup(ANTHROPIC_API_KEY).unwrap_or_default()),
            openai_api_key: SecretString::from(lookup(OPENAI_API_KEY).unwrap_or_default()),
            pipeline,
        }
    }
}
