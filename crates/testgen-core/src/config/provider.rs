//! Provider connection configuration

use serde::{Deserialize, Serialize};

/// Environment variable the API key is read from when the config file does
/// not supply one
pub const API_KEY_ENV_VAR: &str = "GROQ_API_KEY";

/// Default chat-completions base URL
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Connection settings for the completion endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API credential; opaque, read once, never mutated afterwards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
        }
    }
}

impl ProviderConfig {
    /// Create a new provider config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Full URL of the chat-completions endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Fill in the API key from the environment if the config file did not
    /// supply one. A set-but-empty variable counts as absent.
    pub fn resolve_api_key_from_env(&mut self) {
        if self.api_key.is_none() {
            if let Ok(key) = std::env::var(API_KEY_ENV_VAR) {
                if !key.trim().is_empty() {
                    self.api_key = Some(key);
                }
            }
        }
    }

    /// Get a display-safe (masked) version of the API key
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_deref().map(mask_api_key)
    }
}

/// Mask an API key for safe display
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completions_url_handles_trailing_slash() {
        let config = ProviderConfig::new().with_base_url("http://localhost:9999/");
        assert_eq!(
            config.completions_url(),
            "http://localhost:9999/chat/completions"
        );
    }

    #[test]
    fn default_endpoint_targets_groq() {
        let config = ProviderConfig::default();
        assert_eq!(
            config.completions_url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn short_keys_are_fully_masked() {
        assert_eq!(mask_api_key("abcd"), "****");
        assert_eq!(mask_api_key("gsk_0123456789abcdef"), "gsk_...cdef");
    }

    #[test]
    fn masking_handles_multibyte_keys() {
        // must not panic on char boundaries
        assert_eq!(mask_api_key("clé-sécréte-décembre"), "clé-...mbre");
        assert_eq!(mask_api_key("日本語キー"), "*****");
    }
}
