//! Business logic for tandem.
//!
//! Defines the [`llm::provider::ChatProvider`] trait the concrete
//! providers in tandem-infra implement, the timeout-bounded retrying call
//! wrapper, and the two-stage refactor/review pipeline.

pub mod llm;
pub mod pipeline;
