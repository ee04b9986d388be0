//! Error types for testgen

use thiserror::Error;

/// Result type alias for testgen operations
pub type TestGenResult<T> = Result<T, TestGenError>;

/// Main error type for testgen
///
/// Each variant includes contextual information where relevant. Per-attempt
/// failures (`Http`, `MalformedResponse`) are recovered locally by the
/// fallback loop; `NoModelAvailable` is terminal for a request.
#[derive(Error, Debug, Clone)]
pub enum TestGenError {
    /// No API credential could be resolved from config or environment
    #[error("No API key configured: {message}")]
    MissingCredential { message: String },

    /// The user story was empty or whitespace-only after trimming
    #[error("User story is empty")]
    EmptyPrompt,

    /// Every model identifier in the fallback list failed
    #[error("All models failed: {}", .attempts.join("; "))]
    NoModelAvailable {
        /// One note per attempted model, in attempt order
        attempts: Vec<String>,
    },

    /// HTTP request errors (transport failure or non-success status)
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        url: Option<String>,
        status_code: Option<u16>,
    },

    /// A success status whose body lacks `choices[0].message.content`
    #[error("Malformed completion response: {message}")]
    MalformedResponse { message: String },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl TestGenError {
    /// Create a missing-credential error
    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::MissingCredential {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new HTTP error
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
            url: None,
            status_code: None,
        }
    }

    /// Create an HTTP error carrying the status code and request URL
    pub fn http_status(message: impl Into<String>, url: impl Into<String>, status: u16) -> Self {
        Self::Http {
            message: message.into(),
            url: Some(url.into()),
            status_code: Some(status),
        }
    }

    /// Create a malformed-response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Whether the fallback loop may advance to the next model after this
    /// error. Transport failures, non-success statuses and malformed bodies
    /// all count as a failed attempt; everything else aborts the request.
    pub fn is_attempt_failure(&self) -> bool {
        matches!(
            self,
            Self::Http { .. } | Self::MalformedResponse { .. }
        )
    }
}

impl From<std::io::Error> for TestGenError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            path: None,
        }
    }
}

impl From<serde_json::Error> for TestGenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for TestGenError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http {
            message: err.to_string(),
            url: err.url().map(|u| u.to_string()),
            status_code: err.status().map(|s| s.as_u16()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_failures_advance_the_fallback() {
        assert!(TestGenError::http("boom").is_attempt_failure());
        assert!(TestGenError::malformed("no choices").is_attempt_failure());
        assert!(!TestGenError::EmptyPrompt.is_attempt_failure());
        assert!(!TestGenError::missing_credential("unset").is_attempt_failure());
    }

    #[test]
    fn no_model_available_lists_attempts() {
        let err = TestGenError::NoModelAvailable {
            attempts: vec!["m1: status 500".to_string(), "m2: status 503".to_string()],
        };
        let text = err.to_string();
        assert!(text.contains("m1: status 500"));
        assert!(text.contains("m2: status 503"));
    }
}
