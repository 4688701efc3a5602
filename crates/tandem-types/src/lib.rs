//! Shared domain types for tandem.
//!
//! This crate contains the types used across the pipeline: chat messages,
//! completion requests/responses, the error taxonomy, the retry policy
//! value, and the final three-way verdict.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod llm;
pub mod retry;
pub mod verdict;
