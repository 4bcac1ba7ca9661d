use std::io;

use thiserror::Error;

/// Library-wide error type for tpgen operations.
///
/// Only conditions that stop the pipeline before a prompt is dispatched are
/// represented here. Backend failures are reported through [`GenerationError`]
/// and flattened into the result text.
///
/// [`GenerationError`]: crate::domain::GenerationError
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Settings file passed explicitly via `--config` does not exist.
    #[error("Settings file not found: {0}")]
    SettingsFileMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// HTTP client for the generation backend could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_settings_message_names_the_file() {
        let err = AppError::SettingsFileMissing("tpgen.toml".into());
        assert_eq!(err.to_string(), "Settings file not found: tpgen.toml");
    }

    #[test]
    fn io_errors_are_displayed_transparently() {
        let err = AppError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(&err, AppError::Io(e) if e.kind() == io::ErrorKind::PermissionDenied));
        assert_eq!(err.to_string(), "denied");
    }

    #[test]
    fn config_error_wraps_message() {
        let err = AppError::config_error("--model must not be empty");
        assert_eq!(err.to_string(), "--model must not be empty");
    }
}
