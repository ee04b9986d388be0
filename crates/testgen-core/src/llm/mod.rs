//! Chat-completion client and model fallback

pub mod client;
pub mod fallback;
pub mod messages;

pub use client::CompletionClient;
pub use fallback::FallbackRequester;
pub use messages::{ChatMessage, Completion, MessageRole};
