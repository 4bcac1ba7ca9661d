//! Generate command: compose the test-plan prompt and dispatch it.

use std::path::PathBuf;

use crate::app::composer::PromptComposer;
use crate::app::generation_client::GenerationClient;
use crate::domain::{AppError, GenerationResult, ProjectContext, Settings};
use crate::ports::{ChatBackendFactory, FragmentSource};

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Project metadata to interpolate.
    pub context: ProjectContext,
    /// Credential given on the command line.
    pub api_key: Option<String>,
    /// Model override.
    pub model: Option<String>,
    /// Settings file override.
    pub config: Option<PathBuf>,
}

/// Pick the credential: explicit value first, then the environment value.
///
/// Empty strings count as absent.
pub fn resolve_credential(explicit: Option<String>, from_env: Option<String>) -> Option<String> {
    explicit.filter(|key| !key.is_empty()).or_else(|| from_env.filter(|key| !key.is_empty()))
}

/// Execute the generate command against the given adapters.
pub fn execute<S, F>(
    options: &GenerateOptions,
    credential: Option<String>,
    settings: &Settings,
    fragments: &S,
    factory: &F,
) -> Result<GenerationResult, AppError>
where
    S: FragmentSource + ?Sized,
    F: ChatBackendFactory + ?Sized,
{
    let model = match &options.model {
        Some(model) if model.trim().is_empty() => {
            return Err(AppError::config_error("--model must not be empty"));
        }
        Some(model) => model.clone(),
        None => settings.backend.model.clone(),
    };

    let composer = PromptComposer::load(fragments, &settings.prompts)?;
    let composed = composer.compose(&options.context);

    let client = GenerationClient::select(credential, model, factory)?;

    Ok(client.generate(&composed))
}
