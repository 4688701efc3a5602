//! The two-stage refactor/review orchestrator.
//!
//! Stage A (the architect) refactors the user's snippet; its text is
//! forwarded verbatim as stage B's user turn, even when stage A came back
//! empty. Stage B (the QA reviewer) approves or rejects, and the run ends
//! with a three-way [`Verdict`].
//!
//! Both stages go through the same retrying call wrapper but differ in
//! which non-timeout errors they absorb: the architect stage catches only
//! the transport/API classes, the reviewer stage catches everything.
//! Timeouts that survive the retry budget always propagate.

pub mod prompts;

use std::time::Duration;

use tandem_types::llm::{CompletionRequest, LlmError, Message, StageReply};
use tandem_types::retry::RetryPolicy;
use tandem_types::verdict::Verdict;

use crate::llm::provider::ChatProvider;
use crate::llm::retry::call_with_retry;

/// Everything the pipeline needs besides the two providers.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub refactor_model: String,
    pub review_model: String,
    pub max_tokens: u32,
    pub request_timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            refactor_model: "claude-3-opus-20240229".to_string(),
            review_model: "gpt-3.5-turbo-0125".to_string(),
            max_tokens: 1024,
            request_timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
        }
    }
}

/// Which non-timeout errors a stage absorbs into an empty reply.
#[derive(Debug, Clone, Copy)]
enum CatchScope {
    /// Transport and API failures only; parse and request-shape errors
    /// propagate.
    Narrow,
    /// Everything except timeouts.
    Broad,
}

impl CatchScope {
    fn absorbs(self, err: &LlmError) -> bool {
        match self {
            CatchScope::Narrow => matches!(
                err,
                LlmError::Connection(_)
                    | LlmError::RateLimited { .. }
                    | LlmError::Api(_)
                    | LlmError::AuthenticationFailed
            ),
            CatchScope::Broad => !err.is_timeout(),
        }
    }
}

/// Raw provider payload captured for the observability dump.
#[derive(Debug, Clone)]
pub struct StageRecord {
    pub provider: String,
    pub raw: serde_json::Value,
}

/// Result of one pipeline run: the verdict plus the raw payloads in call
/// order.
#[derive(Debug)]
pub struct RunReport {
    pub verdict: Verdict,
    pub responses: Vec<StageRecord>,
}

/// Errors that escape the pipeline and abort the run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{provider} call failed: {source}")]
    Stage {
        provider: String,
        #[source]
        source: LlmError,
    },
}

/// The two-stage orchestrator. Providers are owned, constructed once by
/// the caller and moved in; there is no process-wide client state.
pub struct RefactorPipeline<A, B> {
    refactorer: A,
    reviewer: B,
    config: PipelineConfig,
}

impl<A: ChatProvider, B: ChatProvider> RefactorPipeline<A, B> {
    pub fn new(refactorer: A, reviewer: B, config: PipelineConfig) -> Self {
        Self {
            refactorer,
            reviewer,
            config,
        }
    }

    /// Build the refactor-stage request: the snippet as the sole user
    /// turn, followed by the scripted assistant lead-in.
    pub fn refactor_request(&self, snippet: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.config.refactor_model.clone(),
            messages: vec![
                Message::user(snippet),
                Message::assistant(prompts::ARCHITECT_LEAD_IN),
            ],
            system: Some(prompts::ARCHITECT_SYSTEM.to_string()),
            max_tokens: self.config.max_tokens,
        }
    }

    /// Build the review-stage request: the architect's output as the sole
    /// user turn.
    pub fn review_request(&self, refactored: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.config.review_model.clone(),
            messages: vec![Message::user(refactored)],
            system: Some(prompts::REVIEWER_SYSTEM.to_string()),
            max_tokens: self.config.max_tokens,
        }
    }

    async fn call_stage<P: ChatProvider>(
        &self,
        provider: &P,
        request: &CompletionRequest,
        scope: CatchScope,
        responses: &mut Vec<StageRecord>,
    ) -> Result<StageReply, PipelineError> {
        let outcome = call_with_retry(&self.config.retry, self.config.request_timeout, || {
            provider.complete(request)
        })
        .await;

        match outcome {
            Ok(response) => {
                responses.push(StageRecord {
                    provider: provider.name().to_string(),
                    raw: response.raw,
                });
                Ok(StageReply::Text(response.content))
            }
            Err(err) if scope.absorbs(&err) => {
                tracing::warn!(
                    provider = provider.name(),
                    error = %err,
                    "stage call failed, continuing with empty reply"
                );
                Ok(StageReply::Failed(err))
            }
            Err(err) => Err(PipelineError::Stage {
                provider: provider.name().to_string(),
                source: err,
            }),
        }
    }

    /// Run one refactor/review round trip over `snippet`.
    pub async fn run(&self, snippet: &str) -> Result<RunReport, PipelineError> {
        let mut responses = Vec::with_capacity(2);

        let refactor_request = self.refactor_request(snippet);
        let refactor = self
            .call_stage(
                &self.refactorer,
                &refactor_request,
                CatchScope::Narrow,
                &mut responses,
            )
            .await?;
        // A failed architect stage still forwards an empty user turn.
        let refactor_text = refactor.prompt_content().to_string();

        let review_request = self.review_request(&refactor_text);
        let review = self
            .call_stage(
                &self.reviewer,
                &review_request,
                CatchScope::Broad,
                &mut responses,
            )
            .await?;

        let verdict = Verdict::classify(&refactor_text, &review);
        tracing::info!(outcome = verdict.label(), "pipeline finished");
        Ok(RunReport { verdict, responses })
    }
}
