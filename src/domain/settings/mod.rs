//! Runtime settings for the backend and prompt resources.

mod dto;
mod parse;

pub use parse::parse_settings_content;

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Default settings file, resolved against the working directory.
pub const SETTINGS_FILE: &str = "tpgen.toml";

/// Environment variable holding the fallback backend credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Sampling temperature for every request. Mostly deterministic, not fully.
pub const TEMPERATURE: f32 = 0.2;

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_PERSONA_PATH: &str = "system_prompt.md";
const DEFAULT_GUARD_PATH: &str = "anti_Hallucination_Guard.md";

/// Complete settings after merging the settings file over defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub backend: BackendSettings,
    pub prompts: PromptPaths,
}

/// Chat-completions backend settings.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendSettings {
    /// Chat completions endpoint.
    pub api_url: Url,
    /// Model identifier sent with each request.
    pub model: String,
    /// Request timeout. `None` blocks until the backend answers.
    pub timeout_secs: Option<u64>,
}

impl BackendSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Locations of the persona and guard fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPaths {
    pub persona: PathBuf,
    pub guard: PathBuf,
}

impl Default for PromptPaths {
    fn default() -> Self {
        Self { persona: PathBuf::from(DEFAULT_PERSONA_PATH), guard: PathBuf::from(DEFAULT_GUARD_PATH) }
    }
}

fn default_api_url() -> Url {
    Url::parse(DEFAULT_API_URL).expect("default API URL is valid")
}
