//! Pure parse/validate for the settings file (`tpgen.toml`).

use super::Settings;
use super::dto::SettingsDto;
use crate::domain::AppError;

/// Parse and validate settings from TOML content.
pub fn parse_settings_content(content: &str) -> Result<Settings, AppError> {
    let dto: SettingsDto = toml::from_str(content)?;
    let settings = Settings::from(dto);

    if settings.backend.model.trim().is_empty() {
        return Err(AppError::config_error("backend.model must not be empty"));
    }
    if settings.backend.timeout_secs == Some(0) {
        return Err(AppError::config_error("backend.timeout_secs must be greater than zero"));
    }

    Ok(settings)
}
