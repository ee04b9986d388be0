//! Testgen Core Library
//!
//! This crate provides the core functionality for testgen: configuration,
//! prompt construction, the chat-completion client and the ordered
//! model-fallback requester, plus artifact output.

pub mod artifact;
pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;

// Re-export commonly used types
pub use config::{Config, ModelParameters, ProviderConfig};
pub use error::{TestGenError, TestGenResult};
pub use llm::{ChatMessage, Completion, CompletionClient, FallbackRequester, MessageRole};
pub use prompt::{UserStory, EXAMPLE_STORIES};
