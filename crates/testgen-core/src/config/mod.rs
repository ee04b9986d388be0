//! Configuration loading and validation

mod model_params;
mod provider;

pub use model_params::ModelParameters;
pub use provider::{mask_api_key, ProviderConfig, API_KEY_ENV_VAR};

use crate::error::{TestGenError, TestGenResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default ordered model-fallback list, tried first to last
pub const DEFAULT_MODELS: [&str; 2] = ["llama-3.3-70b-versatile", "mixtral-8x7b"];

/// Default name for the generated test file
pub const DEFAULT_OUTPUT_FILE: &str = "PlaywrightTest.java";

/// Top-level testgen configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Provider connection settings (endpoint and credential)
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Ordered model identifiers; tried in order, first success wins
    #[serde(default = "default_models")]
    pub models: Vec<String>,
    /// Fixed sampling parameters sent with every request
    #[serde(default)]
    pub params: ModelParameters,
    /// File the generated test is written to
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

fn default_models() -> Vec<String> {
    DEFAULT_MODELS.iter().map(|m| m.to_string()).collect()
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            models: default_models(),
            params: ModelParameters::default(),
            output_file: default_output_file(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults when the
    /// file does not exist. The API key is resolved afterwards from the
    /// environment if the file did not supply one.
    pub fn load(path: impl AsRef<Path>) -> TestGenResult<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                TestGenError::io(e.to_string(), Some(path.display().to_string()))
            })?;
            serde_json::from_str(&contents).map_err(|e| {
                TestGenError::config(format!("Invalid config file {}: {}", path.display(), e))
            })?
        } else {
            Self::default()
        };

        config.provider.resolve_api_key_from_env();
        config.validate()?;
        Ok(config)
    }

    /// Write a default configuration file. Fails if the file already exists
    /// unless `force` is set.
    pub fn init_file(path: impl AsRef<Path>, force: bool) -> TestGenResult<()> {
        let path = path.as_ref();
        if path.exists() && !force {
            return Err(TestGenError::config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        let contents = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, contents)
            .map_err(|e| TestGenError::io(e.to_string(), Some(path.display().to_string())))?;
        Ok(())
    }

    /// Validate the loaded configuration
    pub fn validate(&self) -> TestGenResult<()> {
        if self.models.is_empty() {
            return Err(TestGenError::config(
                "Model list is empty; at least one model identifier is required",
            ));
        }
        if self.models.iter().any(|m| m.trim().is_empty()) {
            return Err(TestGenError::config("Model list contains a blank entry"));
        }
        if self.output_file.trim().is_empty() {
            return Err(TestGenError::config("Output file name is empty"));
        }
        self.params.validate()?;
        Ok(())
    }

    /// Ensure an API key is present, as required before any request
    pub fn require_api_key(&self) -> TestGenResult<&str> {
        self.provider.api_key.as_deref().ok_or_else(|| {
            TestGenError::missing_credential(format!(
                "set {} or add \"api_key\" to the config file",
                API_KEY_ENV_VAR
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_fallback_pair() {
        let config = Config::default();
        assert_eq!(
            config.models,
            vec!["llama-3.3-70b-versatile", "mixtral-8x7b"]
        );
        assert_eq!(config.output_file, "PlaywrightTest.java");
        assert!(config.provider.api_key.is_none());
    }

    #[test]
    fn empty_model_list_fails_validation() {
        let config = Config {
            models: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_api_key_is_a_credential_error() {
        let config = Config::default();
        match config.require_api_key() {
            Err(TestGenError::MissingCredential { .. }) => {}
            other => panic!("expected MissingCredential, got {:?}", other),
        }
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.models, config.models);
        assert_eq!(parsed.params.temperature, config.params.temperature);
        assert_eq!(parsed.params.max_tokens, config.params.max_tokens);
    }

    #[test]
    fn partial_config_file_fills_in_defaults() {
        let parsed: Config = serde_json::from_str(r#"{"models":["only-model"]}"#).unwrap();
        assert_eq!(parsed.models, vec!["only-model"]);
        assert_eq!(parsed.output_file, "PlaywrightTest.java");
        assert_eq!(parsed.params.max_tokens, 1500);
    }
}
