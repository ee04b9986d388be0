//! Ordered model fallback over a single completion client

use crate::error::{TestGenError, TestGenResult};
use crate::llm::client::CompletionClient;
use crate::llm::messages::Completion;
use crate::prompt::{build_messages, UserStory};
use tracing::{info, warn};

/// Tries an ordered list of model identifiers against one endpoint and
/// returns the first success.
///
/// One pass only: each model is attempted exactly once, sequentially, with
/// no retry or backoff. The request body is identical across attempts except
/// for the model field.
pub struct FallbackRequester {
    client: CompletionClient,
    models: Vec<String>,
}

impl FallbackRequester {
    /// Create a requester over an ordered, non-empty model list
    pub fn new(client: CompletionClient, models: Vec<String>) -> TestGenResult<Self> {
        if models.is_empty() {
            return Err(TestGenError::config(
                "No models configured for fallback",
            ));
        }
        Ok(Self { client, models })
    }

    /// The model identifiers, in attempt order
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Generate a completion for a story, falling back through the model
    /// list. Returns the first success, or `NoModelAvailable` carrying one
    /// note per failed attempt when the list is exhausted.
    pub async fn request(&self, story: &UserStory) -> TestGenResult<Completion> {
        self.request_with(story, |_, _| {}).await
    }

    /// Like [`request`](Self::request), but invokes `on_failure` once per
    /// failed attempt with the model identifier and its error, so the caller
    /// can show a non-fatal warning even when a later model succeeds.
    pub async fn request_with<F>(
        &self,
        story: &UserStory,
        mut on_failure: F,
    ) -> TestGenResult<Completion>
    where
        F: FnMut(&str, &TestGenError),
    {
        let messages = build_messages(story);
        let mut attempts = Vec::with_capacity(self.models.len());

        for model in &self.models {
            match self.client.complete(model, &messages).await {
                Ok(completion) => {
                    info!(model, "completion generated");
                    return Ok(completion);
                }
                Err(error) if error.is_attempt_failure() => {
                    warn!(model, %error, "model failed, trying next");
                    on_failure(model, &error);
                    attempts.push(format!("{}: {}", model, error));
                }
                Err(error) => return Err(error),
            }
        }

        Err(TestGenError::NoModelAvailable { attempts })
    }
}
