//! Fixed sampling parameters for completion requests

use crate::error::{TestGenError, TestGenResult};
use serde::{Deserialize, Serialize};

/// Sampling parameters sent unchanged with every attempt.
///
/// Only the `model` field of the request body varies across fallback
/// attempts; these stay fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Sampling temperature; kept low for deterministic test code
    #[serde(default = "ModelParameters::default_temperature")]
    pub temperature: f32,
    /// Output-length cap in tokens
    #[serde(default = "ModelParameters::default_max_tokens")]
    pub max_tokens: u32,
}

impl ModelParameters {
    const fn default_temperature() -> f32 {
        0.3
    }

    const fn default_max_tokens() -> u32 {
        1500
    }

    /// Validate parameter ranges
    pub fn validate(&self) -> TestGenResult<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(TestGenError::invalid_input(format!(
                "temperature {} outside [0.0, 2.0]",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(TestGenError::invalid_input("max_tokens must be positive"));
        }
        Ok(())
    }
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            temperature: Self::default_temperature(),
            max_tokens: Self::default_max_tokens(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_request_template() {
        let params = ModelParameters::default();
        assert_eq!(params.temperature, 0.3);
        assert_eq!(params.max_tokens, 1500);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        let params = ModelParameters {
            temperature: 3.5,
            max_tokens: 1500,
        };
        assert!(params.validate().is_err());
    }
}
