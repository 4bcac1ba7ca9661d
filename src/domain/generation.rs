//! Outcome types for a single generation request.

use std::fmt;

use thiserror::Error;

/// Text returned when no backend credential is configured.
pub const VALIDATION_MODE_MESSAGE: &str = "[Logic Validation Mode] LLM Client not initialized. Please provide an API Key to generate real output.";

/// Prefix of every flattened backend failure.
pub const GENERATION_ERROR_PREFIX: &str = "Error during generation:";

/// Categorized failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Backend rejected the credential.
    #[error("authentication failed ({status}): {message}")]
    Authentication { status: u16, message: String },

    /// Backend throttled the request.
    #[error("rate limited: {message}")]
    RateLimited { message: String },

    /// Any other non-success status.
    #[error("backend returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be interpreted as a completion.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Display text produced by one invocation of the generation client.
///
/// Holds backend output, the validation-mode placeholder, or a flattened
/// error description. Callers that need the failure category should use
/// `GenerationClient::try_generate` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult(String);

impl GenerationResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Flatten a backend failure into display text.
    pub fn from_error(error: &GenerationError) -> Self {
        Self(format!("{} {}", GENERATION_ERROR_PREFIX, error))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<Result<String, GenerationError>> for GenerationResult {
    fn from(result: Result<String, GenerationError>) -> Self {
        match result {
            Ok(text) => Self(text),
            Err(error) => Self::from_error(&error),
        }
    }
}

impl fmt::Display for GenerationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
