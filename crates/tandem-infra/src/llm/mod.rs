//! LLM provider implementations.
//!
//! Contains the concrete implementations of the `ChatProvider` trait
//! defined in tandem-core: Anthropic for the refactor stage, OpenAI for
//! the review stage.

pub mod anthropic;
pub mod openai;
