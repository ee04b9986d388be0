//! Single-attempt completion client

use crate::config::{ModelParameters, ProviderConfig};
use crate::error::{TestGenError, TestGenResult};
use crate::llm::messages::{ChatMessage, Completion};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Request body for one attempt; only `model` varies across attempts
#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

/// Client for one chat-completion attempt against a fixed endpoint.
///
/// Holds the credential and sampling parameters; the model identifier is
/// supplied per call so the fallback loop can vary it.
pub struct CompletionClient {
    config: ProviderConfig,
    params: ModelParameters,
    http_client: Client,
}

impl CompletionClient {
    /// Create a new completion client
    pub fn new(config: ProviderConfig, params: ModelParameters) -> Self {
        Self {
            config,
            params,
            http_client: Client::new(),
        }
    }

    /// Create a client with a caller-supplied reqwest client
    pub fn with_http_client(
        config: ProviderConfig,
        params: ModelParameters,
        http_client: Client,
    ) -> Self {
        Self {
            config,
            params,
            http_client,
        }
    }

    /// Issue one POST to the completions endpoint for the given model.
    ///
    /// A non-success status or an unparseable success body is an error; the
    /// caller decides whether to fall back to another model.
    pub async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> TestGenResult<Completion> {
        let url = self.config.completions_url();

        let request_body = CompletionRequest {
            model,
            messages,
            temperature: self.params.temperature,
            max_tokens: self.params.max_tokens,
        };

        debug!(model, url = %url, "sending completion request");

        let mut request = self.http_client.post(&url).json(&request_body);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            TestGenError::http(format!("Request to {} failed: {}", url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TestGenError::http_status(
                format!("Completion API error (status {}): {}", status, error_text),
                url,
                status.as_u16(),
            ));
        }

        let body: Value = response.json().await.map_err(|e| {
            TestGenError::malformed(format!("Response body is not JSON: {}", e))
        })?;

        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                TestGenError::malformed(
                    "Response body lacks choices[0].message.content".to_string(),
                )
            })?;

        Ok(Completion {
            content: content.to_string(),
            model: model.to_string(),
        })
    }
}
