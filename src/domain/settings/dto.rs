use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

use super::{BackendSettings, PromptPaths, Settings};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct SettingsDto {
    pub backend: Option<BackendSettingsDto>,
    pub prompts: Option<PromptPathsDto>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct BackendSettingsDto {
    pub api_url: Option<Url>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct PromptPathsDto {
    pub persona: Option<PathBuf>,
    pub guard: Option<PathBuf>,
}

impl From<SettingsDto> for Settings {
    fn from(dto: SettingsDto) -> Self {
        let default_backend = BackendSettings::default();
        let backend = if let Some(d) = dto.backend {
            BackendSettings {
                api_url: d.api_url.unwrap_or(default_backend.api_url),
                model: d.model.unwrap_or(default_backend.model),
                timeout_secs: d.timeout_secs.or(default_backend.timeout_secs),
            }
        } else {
            default_backend
        };

        let default_prompts = PromptPaths::default();
        let prompts = if let Some(d) = dto.prompts {
            PromptPaths {
                persona: d.persona.unwrap_or(default_prompts.persona),
                guard: d.guard.unwrap_or(default_prompts.guard),
            }
        } else {
            default_prompts
        };

        Settings { backend, prompts }
    }
}
